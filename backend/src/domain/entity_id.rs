//! Strongly typed entity identifiers.
//!
//! Users and specials are both keyed by store-generated UUIDs. Each entity
//! gets its own newtype so a `SpecialId` can never be handed to the users
//! repository by accident.

use std::fmt;

/// Validation errors returned when parsing an identifier from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EntityIdError {
    /// The input was empty.
    #[error("identifier must not be empty")]
    Empty,
    /// The input was not a canonical UUID.
    #[error("identifier must be a valid UUID")]
    Invalid,
}

pub(crate) fn parse_entity_uuid(raw: &str) -> Result<uuid::Uuid, EntityIdError> {
    if raw.is_empty() {
        return Err(EntityIdError::Empty);
    }
    if raw.trim() != raw {
        return Err(EntityIdError::Invalid);
    }
    uuid::Uuid::parse_str(raw).map_err(|_| EntityIdError::Invalid)
}

macro_rules! define_entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        pub struct $name(uuid::Uuid);

        impl $name {
            /// Parse an identifier from its textual form.
            pub fn new(id: impl AsRef<str>) -> Result<Self, EntityIdError> {
                parse_entity_uuid(id.as_ref()).map(Self)
            }

            /// Wrap an existing UUID, e.g. one read back from the store.
            pub const fn from_uuid(uuid: uuid::Uuid) -> Self {
                Self(uuid)
            }

            /// Generate a fresh random identifier.
            pub fn random() -> Self {
                Self(uuid::Uuid::new_v4())
            }

            /// Access the underlying UUID.
            pub const fn as_uuid(&self) -> &uuid::Uuid {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }

        impl std::str::FromStr for $name {
            type Err = EntityIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }
    };
}

define_entity_id! {
    /// Stable user identifier.
    UserId
}

define_entity_id! {
    /// Stable special identifier.
    SpecialId
}

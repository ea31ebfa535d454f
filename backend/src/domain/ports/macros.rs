//! Defines helper macros for generating repository port error enums.
//!
//! Every entity repository reports the same three failure classes. The macro
//! stamps out one enum per repository so each adapter keeps its own error type
//! while the service layer can rely on identical variant names.

macro_rules! define_repository_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident for $resource:literal;
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            /// Repository connection could not be established.
            #[error("{resource} repository connection failed: {message}", resource = $resource)]
            Connection { message: String },
            /// Query or mutation failed during execution.
            #[error("{resource} repository query failed: {message}", resource = $resource)]
            Query { message: String },
            /// The targeted record does not exist.
            #[error("{resource} not found", resource = $resource)]
            NotFound,
        }

        impl $name {
            /// Build a connection failure.
            pub fn connection(message: impl Into<String>) -> Self {
                Self::Connection {
                    message: message.into(),
                }
            }

            /// Build a query failure.
            pub fn query(message: impl Into<String>) -> Self {
                Self::Query {
                    message: message.into(),
                }
            }

            /// Build a missing-record failure.
            pub const fn not_found() -> Self {
                Self::NotFound
            }

            /// Report whether the failure means the record is missing.
            pub const fn is_not_found(&self) -> bool {
                matches!(self, Self::NotFound)
            }
        }
    };
}

pub(crate) use define_repository_error;

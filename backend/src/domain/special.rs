//! Special data model.
//!
//! Specials are priced menu offers that can be switched on and off via
//! `is_active`. Prices travel as `f64` through the domain; the persistence
//! adapter stores them in a fixed-point column.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use super::SpecialId;

/// Persisted special record.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Special {
    #[schema(value_type = String, format = Uuid, example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: SpecialId,
    #[schema(example = "Taco Tuesday")]
    pub title: String,
    #[schema(example = "Two tacos and a drink")]
    pub description: Option<String>,
    #[schema(example = 9.99)]
    pub price: f64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields accepted when creating a special.
///
/// `is_active` falls back to the store default (`true`) when `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSpecial {
    pub title: String,
    pub description: Option<String>,
    pub price: f64,
    pub is_active: Option<bool>,
}

/// Partial update for a special.
///
/// `None` leaves a column untouched; `description: Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpecialChanges {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub price: Option<f64>,
    pub is_active: Option<bool>,
}

impl SpecialChanges {
    /// Apply the set fields to `special`, leaving timestamps to the caller.
    pub fn apply_to(&self, special: &mut Special) {
        if let Some(title) = &self.title {
            special.title.clone_from(title);
        }
        if let Some(description) = &self.description {
            special.description.clone_from(description);
        }
        if let Some(price) = self.price {
            special.price = price;
        }
        if let Some(is_active) = self.is_active {
            special.is_active = is_active;
        }
    }
}

/// Selection applied when listing specials.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialFilter {
    /// Every special regardless of state.
    All,
    /// Only specials with `is_active == true`.
    ActiveOnly,
}

impl SpecialFilter {
    /// Check whether `special` passes the filter.
    pub fn matches(self, special: &Special) -> bool {
        match self {
            Self::All => true,
            Self::ActiveOnly => special.is_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::{fixture, rstest};

    #[fixture]
    fn special() -> Special {
        let stamp = Utc
            .with_ymd_and_hms(2026, 3, 4, 12, 0, 0)
            .single()
            .expect("valid fixture timestamp");
        Special {
            id: SpecialId::random(),
            title: "Test Special".to_owned(),
            description: Some("Test Description".to_owned()),
            price: 99.99,
            is_active: true,
            created_at: stamp,
            updated_at: stamp,
        }
    }

    #[rstest]
    fn serialises_is_active_in_camel_case(special: Special) {
        let value = serde_json::to_value(&special).expect("serialise special");
        assert_eq!(value["isActive"], true);
        assert_eq!(value["price"], 99.99);
        assert!(value.get("is_active").is_none());
    }

    #[rstest]
    fn price_only_change_leaves_other_fields(mut special: Special) {
        let changes = SpecialChanges {
            price: Some(29.99),
            ..SpecialChanges::default()
        };
        changes.apply_to(&mut special);
        assert!((special.price - 29.99).abs() < f64::EPSILON);
        assert_eq!(special.title, "Test Special");
        assert!(special.is_active);
    }

    #[rstest]
    #[case(SpecialFilter::All, true, true)]
    #[case(SpecialFilter::All, false, true)]
    #[case(SpecialFilter::ActiveOnly, true, true)]
    #[case(SpecialFilter::ActiveOnly, false, false)]
    fn filter_matches_by_active_flag(
        mut special: Special,
        #[case] filter: SpecialFilter,
        #[case] is_active: bool,
        #[case] expected: bool,
    ) {
        special.is_active = is_active;
        assert_eq!(filter.matches(&special), expected);
    }
}

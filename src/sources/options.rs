//! Fixed enumerations accepted by the character API for categorical filters.

use crate::state::FilterField;

/// Accepted `status` values.
pub const STATUS_OPTIONS: &[&str] = &["alive", "dead", "unknown"];
/// Accepted `species` values.
pub const SPECIES_OPTIONS: &[&str] = &["Human", "Alien", "Robot", "Animal"];
/// Accepted `gender` values.
pub const GENDER_OPTIONS: &[&str] = &["female", "male", "genderless", "unknown"];

/// What: Ordered values offered for a filter field.
///
/// Inputs:
/// - `field`: Filter field to look up
///
/// Output:
/// - Static slice of accepted values; empty for the free-text `name` field.
///
/// Details:
/// - Populates the selectors only; the server is never asked to validate them.
#[must_use]
pub const fn categorical_options(field: FilterField) -> &'static [&'static str] {
    match field {
        FilterField::Name => &[],
        FilterField::Status => STATUS_OPTIONS,
        FilterField::Species => SPECIES_OPTIONS,
        FilterField::Gender => GENDER_OPTIONS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_has_no_options_and_categoricals_are_ordered() {
        assert!(categorical_options(FilterField::Name).is_empty());
        assert_eq!(
            categorical_options(FilterField::Status),
            &["alive", "dead", "unknown"]
        );
        assert_eq!(categorical_options(FilterField::Species)[0], "Human");
        assert_eq!(categorical_options(FilterField::Gender).len(), 4);
    }
}

//! Query string assembly for commit and load-more fetches.

use crate::state::FilterState;

/// Shape of the load-more query string.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum QueryFormat {
    /// `page=N ` followed by the committed filters, joined by a single space.
    #[default]
    Legacy,
    /// `page=N&field=value...` as a single well-formed query.
    Normalized,
}

impl QueryFormat {
    /// Return the string key used in settings files for this format.
    #[must_use]
    pub const fn as_config_key(self) -> &'static str {
        match self {
            Self::Legacy => "legacy",
            Self::Normalized => "normalized",
        }
    }

    /// Parse a format from its settings key (case-insensitive).
    #[must_use]
    pub fn from_config_key(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" | "compat" => Some(Self::Legacy),
            "normalized" | "normalised" | "standard" => Some(Self::Normalized),
            _ => None,
        }
    }
}

/// What: Serialize active filters into the committed query string.
///
/// Inputs:
/// - `filters`: Current filter values
///
/// Output:
/// - `&field=value` per non-empty field in declaration order; empty when no
///   field is set.
///
/// Details:
/// - Values are concatenated as typed, without percent-encoding. A name
///   containing `&` or `=` therefore splits into extra parameters.
#[must_use]
pub fn build_filter_query(filters: &FilterState) -> String {
    let mut out = String::new();
    for (field, value) in filters.active() {
        out.push('&');
        out.push_str(field.key());
        out.push('=');
        out.push_str(value);
    }
    out
}

/// What: Build the query string for fetching `page` under the committed filters.
///
/// Inputs:
/// - `page`: Page number to request
/// - `committed`: Committed filter query (output of [`build_filter_query`])
/// - `format`: Legacy or normalized joining
///
/// Output:
/// - Legacy: `"page=2 &status=alive"`; Normalized: `"page=2&status=alive"`.
#[must_use]
pub fn build_load_more_query(page: u32, committed: &str, format: QueryFormat) -> String {
    match format {
        QueryFormat::Legacy => format!("page={page} {committed}"),
        QueryFormat::Normalized => format!("page={page}{committed}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FilterField;

    fn filters(pairs: &[(FilterField, &str)]) -> FilterState {
        let mut f = FilterState::default();
        for (field, value) in pairs {
            f.set(*field, value).expect("valid filter value");
        }
        f
    }

    #[test]
    fn empty_filters_yield_empty_query() {
        assert_eq!(build_filter_query(&FilterState::default()), "");
    }

    #[test]
    /// What: One segment per non-empty field, in declaration order.
    ///
    /// Inputs:
    /// - Gender, name and species set in arbitrary order; status empty.
    ///
    /// Output:
    /// - `&name=..&species=..&gender=..`
    fn segments_follow_declaration_order() {
        let f = filters(&[
            (FilterField::Gender, "female"),
            (FilterField::Name, "summer"),
            (FilterField::Species, "Human"),
        ]);
        assert_eq!(
            build_filter_query(&f),
            "&name=summer&species=Human&gender=female"
        );
    }

    #[test]
    fn name_is_not_encoded() {
        let f = filters(&[(FilterField::Name, "mr poopy")]);
        assert_eq!(build_filter_query(&f), "&name=mr poopy");
    }

    #[test]
    /// What: Load-more joining in both formats.
    ///
    /// Inputs:
    /// - Page 2 with `&status=alive`, and page 3 with no filters.
    ///
    /// Output:
    /// - Legacy keeps the space separator (and a trailing space when unfiltered).
    fn load_more_query_formats() {
        assert_eq!(
            build_load_more_query(2, "&status=alive", QueryFormat::Legacy),
            "page=2 &status=alive"
        );
        assert_eq!(
            build_load_more_query(2, "&status=alive", QueryFormat::Normalized),
            "page=2&status=alive"
        );
        assert_eq!(build_load_more_query(3, "", QueryFormat::Legacy), "page=3 ");
        assert_eq!(build_load_more_query(3, "", QueryFormat::Normalized), "page=3");
    }

    #[test]
    fn query_format_config_keys() {
        assert_eq!(
            QueryFormat::from_config_key(" Normalized "),
            Some(QueryFormat::Normalized)
        );
        assert_eq!(
            QueryFormat::from_config_key(QueryFormat::Legacy.as_config_key()),
            Some(QueryFormat::Legacy)
        );
        assert_eq!(QueryFormat::from_config_key("json"), None);
    }
}

//! Command-line argument definition.

use clap::Parser;
use clap::builder::PossibleValuesParser;

use crate::sources::{GENDER_OPTIONS, SPECIES_OPTIONS, STATUS_OPTIONS};
use crate::state::FilterField;

/// mortydex - browse Rick and Morty characters from the terminal
#[derive(Parser, Debug)]
#[command(name = "mortydex")]
#[command(version)]
#[command(about = "Browse Rick and Morty characters from the terminal", long_about = None)]
pub struct Args {
    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Character endpoint to query instead of the configured one
    #[arg(long)]
    pub base_url: Option<String>,

    /// Prefill the name filter
    #[arg(long)]
    pub name: Option<String>,

    /// Prefill the status filter
    #[arg(long, value_parser = PossibleValuesParser::new(STATUS_OPTIONS.iter().copied()))]
    pub status: Option<String>,

    /// Prefill the species filter
    #[arg(long, value_parser = PossibleValuesParser::new(SPECIES_OPTIONS.iter().copied()))]
    pub species: Option<String>,

    /// Prefill the gender filter
    #[arg(long, value_parser = PossibleValuesParser::new(GENDER_OPTIONS.iter().copied()))]
    pub gender: Option<String>,

    /// Print matching characters to stdout and exit instead of starting the TUI
    #[arg(short, long)]
    pub search: bool,

    /// Number of pages to fetch in search mode
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub pages: u32,
}

impl Args {
    /// What: Collect the filter values given on the command line.
    ///
    /// Output:
    /// - `(field, value)` pairs in field declaration order; empty values skipped.
    #[must_use]
    pub fn initial_filters(&self) -> Vec<(FilterField, String)> {
        [
            (FilterField::Name, &self.name),
            (FilterField::Status, &self.status),
            (FilterField::Species, &self.species),
            (FilterField::Gender, &self.gender),
        ]
        .into_iter()
        .filter_map(|(field, v)| {
            v.as_deref()
                .filter(|s| !s.is_empty())
                .map(|s| (field, s.to_string()))
        })
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Filter flags parse and come back in declaration order.
    ///
    /// Inputs:
    /// - `--gender female --name rick --status alive`
    ///
    /// Output:
    /// - name, status, gender pairs; species absent.
    fn filters_parse_in_field_order() {
        let args = Args::try_parse_from([
            "mortydex", "--gender", "female", "--name", "rick", "--status", "alive",
        ])
        .expect("valid args");
        assert_eq!(
            args.initial_filters(),
            vec![
                (FilterField::Name, "rick".to_string()),
                (FilterField::Status, "alive".to_string()),
                (FilterField::Gender, "female".to_string()),
            ]
        );
        assert_eq!(args.pages, 1);
        assert!(!args.search);
    }

    #[test]
    fn rejects_values_outside_enumerations() {
        assert!(Args::try_parse_from(["mortydex", "--status", "zombie"]).is_err());
        assert!(Args::try_parse_from(["mortydex", "--species", "human"]).is_err());
        assert!(Args::try_parse_from(["mortydex", "--pages", "0"]).is_err());
    }
}

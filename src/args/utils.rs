//! Shared utilities for argument processing.

/// What: Determine the log level based on command-line arguments.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - Log level string (trace, debug, info, warn, error).
///
/// Details:
/// - Verbose flag overrides the `--log-level` argument.
#[must_use]
pub fn determine_log_level(args: &crate::args::Args) -> String {
    if args.verbose {
        "debug".to_string()
    } else {
        args.log_level.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::Args;
    use clap::Parser;

    #[test]
    fn verbose_wins_over_log_level() {
        let args = Args::try_parse_from(["mortydex", "--log-level", "warn", "-v"]).expect("args");
        assert_eq!(determine_log_level(&args), "debug");
        let args = Args::try_parse_from(["mortydex", "--log-level", "warn"]).expect("args");
        assert_eq!(determine_log_level(&args), "warn");
    }
}

use crate::logic::QueryFormat;
use crate::theme::types::Settings;
use crate::util::config::{parse_key_value, skip_comment_or_empty, strip_inline_comment};

/// What: Parse settings from settings.conf content.
///
/// Inputs:
/// - `content`: Content of the settings.conf file as a string.
/// - `settings`: Mutable reference to `Settings` to populate.
///
/// Output:
/// - Keys that were not recognized (for a single warning by the caller).
///
/// Details:
/// - Keys are case-insensitive; `.`, `-` and spaces normalize to `_`.
/// - Unparseable values keep the previous value.
pub fn parse_settings(content: &str, settings: &mut Settings) -> Vec<String> {
    let mut unknown = Vec::new();
    for line in content.lines() {
        if skip_comment_or_empty(line) {
            continue;
        }
        let Some((raw_key, raw_val)) = parse_key_value(line) else {
            continue;
        };
        let key = raw_key.to_lowercase().replace(['.', '-', ' '], "_");
        let val = strip_inline_comment(&raw_val);
        match key.as_str() {
            "base_url" | "api_url" => {
                if !val.is_empty() {
                    settings.base_url = val.trim_end_matches('/').to_string();
                }
            }
            "connect_timeout_secs" | "connect_timeout" => {
                if let Ok(v) = val.parse::<u64>()
                    && v > 0
                {
                    settings.connect_timeout_secs = v;
                }
            }
            "request_timeout_secs" | "request_timeout" | "timeout" => {
                if let Ok(v) = val.parse::<u64>()
                    && v > 0
                {
                    settings.request_timeout_secs = v;
                }
            }
            "load_more_query_format" | "query_format" => {
                if let Some(fmt) = QueryFormat::from_config_key(val) {
                    settings.load_more_format = fmt;
                }
            }
            _ => unknown.push(key),
        }
    }
    unknown
}

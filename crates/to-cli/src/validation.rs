//! Bookmark name validation

use std::sync::OnceLock;

use anyhow::{bail, Result};
use regex::Regex;

/// Lowercase letters and digits, starting with a letter
const NAME_PATTERN: &str = "^[a-z][a-z0-9]*$";

fn name_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(NAME_PATTERN).expect("bookmark name pattern is valid"))
}

/// Reject names the shell helpers cannot round-trip
pub fn validate_name(name: &str) -> Result<()> {
    if !name_regex().is_match(name) {
        bail!(
            "Given bookmark name {:?} is invalid: use lowercase letters and digits, starting with a letter",
            name
        );
    }
    Ok(())
}

//! Path shortening for display
//!
//! Paths under the configured home directory are shown with a leading `~`.

use std::path::Path;

use owo_colors::OwoColorize;

/// Shortens paths relative to a home directory
#[derive(Debug, Clone)]
pub struct PathDisplay {
    home: Option<String>,
    color: bool,
}

impl PathDisplay {
    /// `home` of `None` (or an empty path) disables shortening
    pub fn new(home: Option<&Path>, color: bool) -> Self {
        let home = home
            .map(|h| h.to_string_lossy().trim_end_matches('/').to_string())
            .filter(|h| !h.is_empty());
        Self { home, color }
    }

    /// Same display with coloring turned off
    pub fn plain(&self) -> Self {
        Self {
            home: self.home.clone(),
            color: false,
        }
    }

    /// Replace a leading home directory with `~`
    ///
    /// Only whole path components are replaced: with home `/home/me`,
    /// `/home/me/src` becomes `~/src` but `/home/meg` is left alone.
    pub fn shorten(&self, path: &str) -> String {
        let Some(home) = &self.home else {
            return path.to_string();
        };

        match path.strip_prefix(home.as_str()) {
            Some(rest) if rest.is_empty() || rest.starts_with('/') => {
                let tilde = if self.color {
                    "~".cyan().bold().to_string()
                } else {
                    "~".to_string()
                };
                format!("{}{}", tilde, rest)
            }
            _ => path.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn display(home: &str) -> PathDisplay {
        PathDisplay::new(Some(Path::new(home)), false)
    }

    #[test]
    fn test_shorten_under_home() {
        let d = display("/home/me");
        assert_eq!(d.shorten("/home/me/src/proj"), "~/src/proj");
        assert_eq!(d.shorten("/home/me"), "~");
    }

    #[test]
    fn test_shorten_outside_home() {
        let d = display("/home/me");
        assert_eq!(d.shorten("/etc/nginx"), "/etc/nginx");
        assert_eq!(d.shorten("/home/meg/src"), "/home/meg/src");
    }

    #[test]
    fn test_trailing_slash_on_home() {
        let d = display("/home/me/");
        assert_eq!(d.shorten("/home/me/src"), "~/src");
    }

    #[test]
    fn test_no_home_disables_shortening() {
        let d = PathDisplay::new(None, false);
        assert_eq!(d.shorten("/home/me/src"), "/home/me/src");

        let d = PathDisplay::new(Some(Path::new("")), false);
        assert_eq!(d.shorten("/home/me/src"), "/home/me/src");
    }

    #[test]
    fn test_colored_tilde() {
        let d = PathDisplay::new(Some(Path::new("/home/me")), true);
        let shortened = d.shorten("/home/me/src");
        assert!(shortened.contains('~'));
        assert!(shortened.ends_with("/src"));
        assert_ne!(shortened, "~/src");
        assert_eq!(d.plain().shorten("/home/me/src"), "~/src");
    }
}

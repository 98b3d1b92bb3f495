//! Output formatting for CLI
//!
//! Provides consistent output formatting across all commands:
//! - Human-readable default output
//! - JSON output (--json flag)
//! - Quiet mode for scripting (--quiet flag)

use owo_colors::OwoColorize;

use to_core::Bookmark;

use crate::display::PathDisplay;

const SPLIT_LINE: &str = "==================================================";

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output (default)
    Human,
    /// JSON output
    Json,
    /// Quiet mode - minimal output
    Quiet,
}

impl OutputFormat {
    /// Create format from CLI flags
    pub fn from_flags(json: bool, quiet: bool) -> Self {
        if quiet {
            OutputFormat::Quiet
        } else if json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}

/// What a listing was narrowed by, for the header line
#[derive(Debug, Clone, Default)]
pub struct ListScope<'a> {
    pub prefix: Option<&'a str>,
    pub dir: Option<&'a str>,
}

/// Output helper for consistent formatting
pub struct Output {
    /// The output format
    pub format: OutputFormat,
    color: bool,
}

impl Output {
    /// Coloring only applies to human output
    pub fn new(format: OutputFormat, color: bool) -> Self {
        Self {
            format,
            color: color && format == OutputFormat::Human,
        }
    }

    /// Check if output is in quiet mode
    pub fn is_quiet(&self) -> bool {
        matches!(self.format, OutputFormat::Quiet)
    }

    pub fn color(&self) -> bool {
        self.color
    }

    /// Print a filtered bookmark listing
    pub fn print_bookmarks(
        &self,
        bookmarks: &[Bookmark],
        scope: &ListScope,
        display: &PathDisplay,
    ) {
        match self.format {
            OutputFormat::Human => {
                println!("{}", self.render_listing(bookmarks, scope, display));
            }
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(bookmarks).unwrap_or_default();
                println!("{}", json);
            }
            OutputFormat::Quiet => {
                for b in bookmarks {
                    println!("{}", b.name);
                }
            }
        }
    }

    /// Print the resolved target of `find`
    ///
    /// Human and quiet output are the bare path so `cd "$(to find x)"` works.
    pub fn print_resolved(&self, bookmark: &Bookmark) {
        match self.format {
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({"name": bookmark.name, "path": bookmark.path})
                );
            }
            OutputFormat::Human | OutputFormat::Quiet => println!("{}", bookmark.path),
        }
    }

    /// Print the candidates of an ambiguous prefix to stderr
    pub fn print_candidates(&self, prefix: &str, candidates: &[Bookmark], display: &PathDisplay) {
        if self.is_quiet() || candidates.is_empty() {
            return;
        }
        eprintln!("Multiple bookmarks match '{}':", prefix);
        for b in candidates {
            eprintln!("  {}", self.render_entry(b, prefix, display));
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        match self.format {
            OutputFormat::Human => {
                if self.color {
                    println!("{} {}", "✓".green().bold(), message);
                } else {
                    println!("✓ {}", message);
                }
            }
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({"status": "success", "message": message})
                );
            }
            OutputFormat::Quiet => {}
        }
    }

    /// Header, separator and one `name: path` line per bookmark
    fn render_listing(
        &self,
        bookmarks: &[Bookmark],
        scope: &ListScope,
        display: &PathDisplay,
    ) -> String {
        let mut header = format!("Found {} saved bookmarks", bookmarks.len());
        if let Some(prefix) = scope.prefix {
            header.push_str(&format!(" with prefix {:?}", prefix));
        }
        if let Some(dir) = scope.dir {
            header.push_str(&format!(" under dir {:?}", display.plain().shorten(dir)));
        }

        let mut out = String::new();
        out.push_str(&self.bold(&header));
        out.push('\n');
        out.push_str(SPLIT_LINE);
        out.push('\n');

        let prefix = scope.prefix.unwrap_or("");
        for b in bookmarks {
            out.push_str(&self.render_entry(b, prefix, display));
            out.push('\n');
        }
        out
    }

    /// `name: path`, with the matched name prefix highlighted
    fn render_entry(&self, bookmark: &Bookmark, prefix: &str, display: &PathDisplay) -> String {
        let rest = bookmark.name.strip_prefix(prefix).unwrap_or(&bookmark.name);
        let head = &bookmark.name[..bookmark.name.len() - rest.len()];
        let head = if self.color {
            head.blue().bold().to_string()
        } else {
            head.to_string()
        };
        let path = if self.color {
            display.shorten(&bookmark.path)
        } else {
            display.plain().shorten(&bookmark.path)
        };
        format!("{}{}: {}", head, rest, path)
    }

    fn bold(&self, s: &str) -> String {
        if self.color {
            s.bold().to_string()
        } else {
            s.to_string()
        }
    }
}

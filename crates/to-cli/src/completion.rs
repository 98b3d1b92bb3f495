//! Completion scripts for the `j` jump function
//!
//! `j` is a small shell function (`cd (to find $argv)`) kept in the user's
//! shell config. These generators list every bookmark so the shell can
//! complete its names.

use clap::ValueEnum;

use to_core::Bookmark;

use crate::display::PathDisplay;

/// Output flavour for `to genj`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum JumpShell {
    /// fish completion script
    Fish,
    /// `name<TAB>path` lines, for custom integrations
    Plain,
}

/// Render completions for the given shell
///
/// Paths are shortened with `display`, never colored.
pub fn generate(shell: JumpShell, bookmarks: &[Bookmark], display: &PathDisplay) -> String {
    let display = display.plain();
    match shell {
        JumpShell::Fish => fish_script(bookmarks, &display),
        JumpShell::Plain => plain_listing(bookmarks, &display),
    }
}

/// One `name\tpath` line per bookmark, no trailing newline
pub fn plain_listing(bookmarks: &[Bookmark], display: &PathDisplay) -> String {
    bookmarks
        .iter()
        .map(|b| format!("{}\t{}", b.name, display.shorten(&b.path)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// fish script registering every bookmark as a completion for `j`
pub fn fish_script(bookmarks: &[Bookmark], display: &PathDisplay) -> String {
    let mut out = String::from("#!/usr/bin/env fish\n");

    if !bookmarks.is_empty() {
        out.push_str("\nset -l bookmark_keys");
        for b in bookmarks {
            out.push_str(" \\\n  ");
            out.push_str(&b.name);
        }
        out.push('\n');
    }

    out.push_str("\n# cleanup current autocomplete\n");
    out.push_str("complete -c j -e\n");
    out.push_str("\n# list all bookmarks\n");

    for b in bookmarks {
        out.push_str(&format!(
            "complete -f -c j -n \"not __fish_seen_subcommand_from $bookmark_keys\" -a '{}' -d '{}'\n",
            fish_quote(&b.name),
            fish_quote(&display.shorten(&b.path))
        ));
    }

    out
}

/// Escape for a fish single-quoted string
fn fish_quote(s: &str) -> String {
    s.replace('\\', "\\\\").replace('\'', "\\'")
}

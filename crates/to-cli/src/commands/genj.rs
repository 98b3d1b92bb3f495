//! Jump-function completion handler

use anyhow::Result;

use to_core::Store;

use crate::completion::{self, JumpShell};
use crate::display::PathDisplay;

/// Print the completion script for `j`
pub fn generate(store: &Store, shell: JumpShell, display: &PathDisplay) -> Result<()> {
    let bookmarks = store.list_with_filters(&[]);
    let script = completion::generate(shell, &bookmarks, display);
    if !script.is_empty() {
        println!("{}", script);
    }
    Ok(())
}

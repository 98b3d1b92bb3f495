//! Completion scripts for `to` itself

use std::io;

use anyhow::Result;
use clap::Command;
use clap_complete::Shell;

/// Write the completion script for `shell` to stdout
pub fn generate(shell: Shell, mut cmd: Command) -> Result<()> {
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}

//! Command-line argument parsing
//!
//! Supports:
//! - Re-formatting the table at a line in place (or to stdout)
//! - Copying a table to the clipboard
//! - Pasting clipboard text into a table

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::grid::CellPosition;

/// Edit Markdown pipe tables as a grid
#[derive(Parser, Debug)]
#[command(name = "mdgrid", version, about = "Edit Markdown pipe tables as a grid")]
pub struct CliArgs {
    /// Config file to use instead of ~/.config/mdgrid/config.yaml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Align the columns of the table at a line
    Format {
        /// Markdown file
        file: PathBuf,
        /// Any line of the table (1-indexed)
        #[arg(long, value_name = "N")]
        line: usize,
        /// Print the formatted table instead of rewriting the file
        #[arg(long)]
        stdout: bool,
    },
    /// Copy a whole table to the clipboard as tab-separated text
    Copy {
        file: PathBuf,
        #[arg(long, value_name = "N")]
        line: usize,
    },
    /// Paste clipboard text into a table and save the file
    Paste {
        file: PathBuf,
        #[arg(long, value_name = "N")]
        line: usize,
        /// Target row in the grid (0 = header row)
        #[arg(long, default_value_t = 0)]
        row: usize,
        /// Target column in the grid
        #[arg(long, default_value_t = 0)]
        col: usize,
    },
}

/// What to do, with document lines converted to 0-indexed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Format {
        file: PathBuf,
        line: usize,
        to_stdout: bool,
    },
    Copy {
        file: PathBuf,
        line: usize,
    },
    Paste {
        file: PathBuf,
        line: usize,
        target: CellPosition,
    },
}

impl Action {
    pub fn file(&self) -> &PathBuf {
        match self {
            Action::Format { file, .. } | Action::Copy { file, .. } | Action::Paste { file, .. } => {
                file
            }
        }
    }
}

/// Convert a 1-indexed `--line` to 0-indexed
fn zero_based(line: usize) -> Result<usize, String> {
    line.checked_sub(1)
        .ok_or_else(|| "--line is 1-indexed; use 1 for the first line".to_string())
}

impl CliArgs {
    /// Convert parsed CLI args into an action
    pub fn into_action(self) -> Result<Action, String> {
        let action = match self.command {
            CliCommand::Format { file, line, stdout } => Action::Format {
                file,
                line: zero_based(line)?,
                to_stdout: stdout,
            },
            CliCommand::Copy { file, line } => Action::Copy {
                file,
                line: zero_based(line)?,
            },
            CliCommand::Paste {
                file,
                line,
                row,
                col,
            } => Action::Paste {
                file,
                line: zero_based(line)?,
                target: CellPosition::new(row, col),
            },
        };
        Ok(action)
    }
}

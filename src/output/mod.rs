//! Output formatting for CLI results
//!
//! Data goes to stdout in the selected format; notices go to stderr so JSON
//! output stays parseable.

use colored::Colorize;

use crate::board::{Notice, NoticeLevel};
use crate::cli::OutputFormat;
use crate::error::Result;

pub mod formatters;
pub mod json;
pub mod progress;
pub mod table;

/// Trait for types that can be formatted for output
pub trait Formattable {
    /// Format the data according to the specified format
    fn format(&self, format: OutputFormat) -> Result<String>;

    /// Format and print to stdout
    fn print(&self, format: OutputFormat) -> Result<()> {
        println!("{}", self.format(format)?);
        Ok(())
    }
}

/// One-line notice with its glyph, uncolored when colors are off
pub fn format_notice(notice: &Notice) -> String {
    let glyph = match notice.level {
        NoticeLevel::Success => "✓".green(),
        NoticeLevel::Info => "→".cyan(),
        NoticeLevel::Warning => "⚠".yellow(),
        NoticeLevel::Error => "✗".red(),
    };
    format!("{} {}", glyph, notice.message)
}

/// Print a notice to stderr
pub fn print_notice(notice: &Notice) {
    eprintln!("{}", format_notice(notice));
}

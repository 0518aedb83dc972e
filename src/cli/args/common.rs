//! Common CLI types shared across commands

use clap::ValueEnum;

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty format - human-optimized rich formatting (default)
    #[default]
    Pretty,
    /// Table format - one row per entry
    Table,
    /// JSON format - structured for scripts
    Json,
}

impl OutputFormat {
    /// Parse a format name from the config file, ignoring case
    pub fn from_config(value: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(value.trim(), true).ok()
    }

    /// Whether progress and prompts may draw on the terminal
    pub fn is_human(&self) -> bool {
        !matches!(self, OutputFormat::Json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config() {
        assert_eq!(OutputFormat::from_config("json"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_config(" Table "), Some(OutputFormat::Table));
        assert_eq!(OutputFormat::from_config("yaml"), None);
    }

    #[test]
    fn test_default_is_pretty() {
        assert_eq!(OutputFormat::default(), OutputFormat::Pretty);
        assert!(OutputFormat::Pretty.is_human());
        assert!(!OutputFormat::Json.is_human());
    }
}

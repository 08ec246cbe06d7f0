//! Command-line arguments and config resolution

use std::path::PathBuf;

use clap::Parser;

use artic_core::ArticConfig;

/// Browse and select artworks from the Art Institute of Chicago API
#[derive(Parser, Debug, Default)]
#[command(name = "artic", version, about)]
pub struct Cli {
    /// Config file (defaults to <config dir>/artic-tui/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// API root, e.g. https://api.artic.edu/api/v1
    #[arg(long)]
    pub base_url: Option<String>,

    /// Rows per page
    #[arg(long)]
    pub page_size: Option<u32>,

    /// Log file (the terminal is taken by the UI)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Load the config file, apply flag overrides, and validate
    pub fn resolve_config(&self) -> artic_core::Result<ArticConfig> {
        let mut config = match &self.config {
            Some(path) => ArticConfig::from_file(path)?,
            None => ArticConfig::load_standard()?,
        };
        self.apply(&mut config);
        config.validate()?;
        Ok(config)
    }

    fn apply(&self, config: &mut ArticConfig) {
        if let Some(base_url) = &self.base_url {
            config.api.base_url = base_url.clone();
        }
        if let Some(page_size) = self.page_size {
            config.table.page_size = page_size;
        }
        if let Some(log_file) = &self.log_file {
            config.logging.file = Some(log_file.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "artic",
            "--base-url",
            "http://localhost:8080/api/v1",
            "--page-size",
            "25",
        ])
        .unwrap();

        let mut config = ArticConfig::default();
        cli.apply(&mut config);
        assert_eq!(config.api.base_url, "http://localhost:8080/api/v1");
        assert_eq!(config.table.page_size, 25);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_page_size_fails_validation() {
        let cli = Cli {
            page_size: Some(0),
            config: Some(PathBuf::from("/nonexistent/artic.toml")),
            ..Cli::default()
        };
        assert!(cli.resolve_config().is_err());

        let mut config = ArticConfig::default();
        cli.apply(&mut config);
        assert!(config.validate().is_err());
    }
}

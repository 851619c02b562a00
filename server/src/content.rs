//! Portfolio content loading.

use folio_engine::Portfolio;
use std::path::{Path, PathBuf};

/// Errors while loading portfolio content.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse portfolio JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid portfolio: {0}")]
    Invalid(#[from] folio_engine::Error),
}

/// Parse and validate portfolio JSON.
pub fn parse_portfolio(json: &str) -> Result<Portfolio, ContentError> {
    let portfolio: Portfolio = serde_json::from_str(json)?;
    portfolio.validate()?;
    Ok(portfolio)
}

/// Read, parse and validate the portfolio file.
pub async fn load_portfolio(path: &Path) -> Result<Portfolio, ContentError> {
    let json = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    parse_portfolio(&json)
}

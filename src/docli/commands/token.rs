use crate::auth::TOKEN_ENV;
use crate::config::DocliConfig;
use crate::error::Result;
use crate::output::{Block, Document, Output};
use crate::styles::{GREEN, RED};
use std::path::Path;

/// Stores `token` as the only token in the config directory.
pub fn set(
    config_dir: &Path,
    token: &str,
    env_token_set: bool,
    out: &Output,
) -> Result<Document> {
    let mut config = DocliConfig::load(config_dir)?;
    config.set_token(token)?;
    config.save(config_dir)?;

    if out.is_json() {
        return Ok(Document::new().with(out.message("Token supplied!")));
    }
    let mut document =
        Document::new().with(Block::Message(out.painter.paint(GREEN, "Token supplied!")));
    if env_token_set {
        document.push(Block::Message(out.painter.paint(
            RED,
            &format!(
                "This will have no effect while the {} environment variable is set",
                TOKEN_ENV
            ),
        )));
    }
    Ok(document)
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocliError {
    /// The API answered with a non-success status.
    #[error("{message} ({status}{})", id_suffix(.id))]
    Api {
        status: u16,
        id: String,
        message: String,
    },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error(
        "No auth token found. Run `docli token <token>` or set the DOCLI_TOKEN environment variable"
    )]
    MissingToken,

    #[error("{0}")]
    Validation(String),
}

impl DocliError {
    pub fn api(status: u16, id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            id: id.into(),
            message: message.into(),
        }
    }

    /// Validation errors come from bad input rather than a failed operation.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

fn id_suffix(id: &str) -> String {
    if id.is_empty() {
        String::new()
    } else {
        format!(" {}", id)
    }
}

pub type Result<T> = std::result::Result<T, DocliError>;

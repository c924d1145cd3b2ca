use thiserror::Error;

/// Exit status used when no GitHub token could be found.
pub const MISSING_TOKEN_EXIT_CODE: i32 = 86;

#[derive(Error, Debug)]
pub enum GitfullstoryError {
    #[error("Error, missing github personal access token!")]
    MissingToken,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("GitHub API error: {0}")]
    GitHub(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Interrupted")]
    Interrupted,
}

impl GitfullstoryError {
    pub fn exit_code(&self) -> i32 {
        match self {
            GitfullstoryError::MissingToken => MISSING_TOKEN_EXIT_CODE,
            GitfullstoryError::Interrupted => 130,
            _ => 1,
        }
    }
}

impl From<octocrab::Error> for GitfullstoryError {
    fn from(err: octocrab::Error) -> Self {
        GitfullstoryError::GitHub(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GitfullstoryError>;

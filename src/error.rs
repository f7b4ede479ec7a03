use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Set RIOT_API_KEY via --riot-api-key or .env")]
    MissingCredential,

    #[error("Could not create output directory {}: {source}", .path.display())]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Tag catalog error: {0}")]
    Catalog(String),

    #[error("Unknown champion: {0}")]
    UnknownChampion(String),

    #[error("{0} is banned and cannot be picked")]
    BannedPick(String),

    #[error("{0} was picked more than once")]
    DuplicatePick(String),

    #[error("JSON error: {0}")]
    JsonError(String),
}

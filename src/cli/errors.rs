use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid grid specification: {value}. Expected ROWSxCOLS, e.g. 2x3, 2x, x3")]
    InvalidGrid { value: String },

    #[error("Invalid tile size: {value}. Expected WIDTHxHEIGHT with positive integers")]
    InvalidTileSize { value: String },

    #[error("Invalid color: {value}. Expected hex like #RRGGBB")]
    InvalidColor { value: String },

    #[error("Missing input: provide image files with --input or a directory with --input-dir")]
    MissingInput,

    #[error("No decodable images found in input directory: {dir}")]
    EmptyInputDir { dir: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid params file: {0}")]
    Params(#[from] serde_json::Error),
}

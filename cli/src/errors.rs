use std::io;
use std::path::PathBuf;

use hill_cipher::errors::HillCipherError;

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Cipher(#[from] HillCipherError),

    #[error("No key given. Pass --key or --key-file")]
    MissingKey,
    #[error("Failed to read key file {}: {source}", .path.display())]
    KeyFile { path: PathBuf, source: io::Error },
    #[error("Invalid key JSON: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("{} already exists. Use --force to overwrite", .0.display())]
    OutputExists(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

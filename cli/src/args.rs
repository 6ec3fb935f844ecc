use std::fs;
use std::io;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use hill_cipher::ring::KeyMatrix;

use crate::errors::CliError;

#[derive(Parser, Debug)]
#[command(name = "hill")]
#[command(about = "Hill cipher over 2x2 key matrices mod 26")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encrypt text and print the ciphertext
    Encrypt {
        #[command(flatten)]
        key: KeyArgs,

        /// Plaintext (read from stdin when omitted)
        text: Option<String>,
    },

    /// Decrypt ciphertext and print the plaintext
    Decrypt {
        #[command(flatten)]
        key: KeyArgs,

        /// Ciphertext (read from stdin when omitted)
        text: Option<String>,
    },

    /// Show the determinant, its inverse and the inverse matrix of a key
    Inspect {
        #[command(flatten)]
        key: KeyArgs,
    },

    /// Encrypt then decrypt, printing every intermediate value
    Run {
        #[command(flatten)]
        key: KeyArgs,

        /// Plaintext (read from stdin when omitted)
        text: Option<String>,
    },

    /// Generate a random invertible key as JSON
    GenerateKey {
        /// Write the key to this file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Overwrite an existing output file
        #[arg(short, long)]
        force: bool,
    },
}

/// Where the key matrix comes from. Exactly one source is required.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct KeyArgs {
    /// Key entries in row-major order, e.g. "3,3,2,5"
    #[arg(short, long, allow_hyphen_values = true)]
    pub key: Option<KeyMatrix>,

    /// JSON file holding the key as [[a, b], [c, d]]
    #[arg(long, value_name = "FILE")]
    pub key_file: Option<PathBuf>,
}

impl KeyArgs {
    pub fn load(&self) -> Result<KeyMatrix, CliError> {
        if let Some(key) = self.key {
            return Ok(key);
        }

        match &self.key_file {
            Some(path) => {
                let json = fs::read_to_string(path).map_err(|source| CliError::KeyFile {
                    path: path.clone(),
                    source,
                })?;
                let key: KeyMatrix = serde_json::from_str(&json)?;
                log::debug!("Loaded key {} from {}", key, path.display());
                Ok(key)
            }
            None => Err(CliError::MissingKey),
        }
    }
}

/// Returns the positional text, or everything on stdin when it was omitted.
pub fn text_or_stdin(text: Option<String>) -> Result<String, CliError> {
    match text {
        Some(text) => Ok(text),
        None => Ok(io::read_to_string(io::stdin())?),
    }
}

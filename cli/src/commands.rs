use std::fs;
use std::io::Write;
use std::path::Path;

use hill_cipher::ring::{InverseMatrix, KeyMatrix, Ring};
use hill_cipher::{decrypt, decrypt_blocks, encrypt, encrypt_blocks, invert_key_matrix, normalize};

use crate::args::{Command, text_or_stdin};
use crate::errors::CliError;

pub fn execute(command: Command, out: &mut impl Write) -> Result<(), CliError> {
    match command {
        Command::Encrypt { key, text } => {
            let key = key.load()?;
            let text = text_or_stdin(text)?;
            writeln!(out, "{}", encrypt(&text, &key))?;
        }
        Command::Decrypt { key, text } => {
            let key = key.load()?;
            let text = text_or_stdin(text)?;
            writeln!(out, "{}", decrypt(&text, &key)?)?;
        }
        Command::Inspect { key } => {
            let key = key.load()?;
            write_key(out, &key)?;
            let inverse = write_inverse(out, &key)?;
            log::debug!("Key {} is invertible, inverse {}", key, inverse.matrix());
        }
        Command::Run { key, text } => {
            let key = key.load()?;
            let text = text_or_stdin(text)?;
            run(out, &key, &text)?;
        }
        Command::GenerateKey { output, force } => {
            generate_key(out, output.as_deref(), force)?;
        }
    }

    Ok(())
}

/// Encrypts then decrypts `text`, printing the diagnostics and all three texts.
///
/// Stops after the determinant when the key cannot decrypt.
fn run(out: &mut impl Write, key: &KeyMatrix, text: &str) -> Result<(), CliError> {
    write_key(out, key)?;

    let plain = normalize(text);
    let cipher = encrypt_blocks(&plain, key);

    let inverse = write_inverse(out, key)?;
    let decrypted = decrypt_blocks(&cipher, &inverse);

    writeln!(out, "\n========== RESULTS ==========")?;
    writeln!(out, "Plaintext:   {}", plain)?;
    writeln!(out, "Ciphertext:  {}", cipher)?;
    writeln!(out, "Decrypted:   {}", decrypted)?;

    Ok(())
}

fn write_key(out: &mut impl Write, key: &KeyMatrix) -> Result<(), CliError> {
    writeln!(out, "Key Matrix:")?;
    write_matrix(out, key)
}

/// Prints the determinant, then its inverse and the inverse matrix if they exist.
fn write_inverse(out: &mut impl Write, key: &KeyMatrix) -> Result<InverseMatrix, CliError> {
    writeln!(
        out,
        "\nDeterminant (mod 26): {}",
        key.determinant(&Ring::alphabet())
    )?;

    let inverse = invert_key_matrix(key)?;
    writeln!(out, "Modular Inverse: {}", inverse.determinant_inverse())?;
    writeln!(out, "\nInverse Matrix:")?;
    write_matrix(out, inverse.matrix())?;

    Ok(inverse)
}

fn write_matrix(out: &mut impl Write, matrix: &KeyMatrix) -> Result<(), CliError> {
    for row in matrix.rows() {
        writeln!(out, "{} {}", row[0], row[1])?;
    }
    Ok(())
}

fn generate_key(out: &mut impl Write, output: Option<&Path>, force: bool) -> Result<(), CliError> {
    let key = KeyMatrix::random_invertible();
    let json = serde_json::to_string(&key)?;

    match output {
        Some(path) => {
            if path.exists() && !force {
                return Err(CliError::OutputExists(path.to_path_buf()));
            }
            fs::write(path, &json)?;
            log::info!("Generated key {}", key);
            writeln!(out, "Key saved to: {}", path.display())?;
        }
        None => writeln!(out, "{}", json)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use hill_cipher::errors::HillCipherError;

    use crate::args::KeyArgs;

    fn key_args(key: &str) -> KeyArgs {
        KeyArgs {
            key: Some(key.parse().unwrap()),
            key_file: None,
        }
    }

    fn execute_to_string(command: Command) -> Result<String, CliError> {
        let mut out = Vec::new();
        execute(command, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_encrypt_and_decrypt_commands() {
        let encrypted = execute_to_string(Command::Encrypt {
            key: key_args("3,3,2,5"),
            text: Some("help".to_string()),
        })
        .unwrap();
        assert_eq!(encrypted, "HIAT\n");

        let decrypted = execute_to_string(Command::Decrypt {
            key: key_args("3,3,2,5"),
            text: Some("HIAT".to_string()),
        })
        .unwrap();
        assert_eq!(decrypted, "HELP\n");
    }

    #[test]
    fn test_run_prints_every_stage() {
        let output = execute_to_string(Command::Run {
            key: key_args("3,3,2,5"),
            text: Some("HELP".to_string()),
        })
        .unwrap();

        let expected = "Key Matrix:\n3 3\n2 5\n\
            \nDeterminant (mod 26): 9\n\
            Modular Inverse: 3\n\
            \nInverse Matrix:\n15 17\n20 9\n\
            \n========== RESULTS ==========\n\
            Plaintext:   HELP\n\
            Ciphertext:  HIAT\n\
            Decrypted:   HELP\n";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_run_stops_on_singular_key() {
        let mut out = Vec::new();
        let result = execute(
            Command::Run {
                key: key_args("2,4,1,2"),
                text: Some("HELP".to_string()),
            },
            &mut out,
        );

        assert!(matches!(
            result,
            Err(CliError::Cipher(HillCipherError::NotInvertible { determinant: 0 }))
        ));
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Determinant (mod 26): 0"));
        assert!(!output.contains("Decrypted:"));
    }

    #[test]
    fn test_inspect_prints_inverse() {
        let output = execute_to_string(Command::Inspect {
            key: key_args("3,3,2,5"),
        })
        .unwrap();
        assert!(output.contains("Modular Inverse: 3"));
        assert!(output.contains("15 17\n20 9\n"));
    }

    #[test]
    fn test_generate_key_prints_invertible_json() {
        let output = execute_to_string(Command::GenerateKey {
            output: None,
            force: false,
        })
        .unwrap();
        let key: KeyMatrix = serde_json::from_str(output.trim()).unwrap();
        assert!(key.is_invertible());
    }

    #[test]
    fn test_generate_key_respects_existing_file() {
        let path = std::env::temp_dir().join(format!("hill-generated-{}.json", std::process::id()));
        fs::write(&path, "[[1, 0], [0, 1]]").unwrap();

        let refused = execute_to_string(Command::GenerateKey {
            output: Some(path.clone()),
            force: false,
        });
        assert!(matches!(refused, Err(CliError::OutputExists(_))));

        execute_to_string(Command::GenerateKey {
            output: Some(path.clone()),
            force: true,
        })
        .unwrap();
        let key: KeyMatrix = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        fs::remove_file(&path).unwrap();

        assert!(key.is_invertible());
    }
}

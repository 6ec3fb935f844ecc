pub mod cipher;
pub mod errors;
pub mod preset;
pub mod ring;
pub mod text;

pub use cipher::{HillCipher, decrypt, decrypt_blocks, encrypt, encrypt_blocks, invert_key_matrix};
pub use errors::HillCipherError;
pub use ring::{InverseMatrix, KeyMatrix};
pub use text::{CipherText, NormalizedText, normalize};

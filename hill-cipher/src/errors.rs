#[derive(thiserror::Error, Debug)]
pub enum HillCipherError {
    /// The key matrix determinant has no inverse mod 26 (gcd(det, 26) != 1).
    #[error("Key matrix not invertible: determinant {determinant} has no inverse mod 26")]
    NotInvertible { determinant: i64 },
    /// Error when trying to find a modular inverse that doesn't exist (gcd(a, k) != 1).
    #[error("NoInverse: {value} has no inverse mod {modulus}")]
    NoInverse { value: i64, modulus: u64 },
    /// Error when creating a ring with an invalid modulus (k <= 1).
    #[error("InvalidModulus: {0}")]
    InvalidModulus(String),

    #[error("InvalidKey: {0}")]
    InvalidKey(String),
    #[error("MalformedCipherText: {0}")]
    MalformedCipherText(String),

    #[error("Data serialization: {0}")]
    SerializationError(#[from] serde_json::Error),
}

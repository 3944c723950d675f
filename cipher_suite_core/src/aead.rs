//! Passphrase-based strong cipher: PBKDF2 key derivation in front of
//! AES-256-GCM.
//!
//! The encoded form is self-contained: a version byte, the key-derivation
//! salt, the GCM nonce, and the ciphertext with its tag, wrapped in one
//! Base64 string. Decryption never distinguishes a wrong passphrase from
//! a tampered payload; GCM authentication fails identically for both.

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use pbkdf2::pbkdf2_hmac;
use rand::RngCore;
use rand::rngs::OsRng;
use sha2::Sha256;

use crate::engine::CipherError;

pub const ENVELOPE_VERSION: u8 = 1;
pub const SALT_BYTES: usize = 16;
pub const NONCE_BYTES: usize = 12;
pub const TAG_BYTES: usize = 16;

const KEY_BYTES: usize = 32;
const PBKDF2_ROUNDS: u32 = 100_000;
const HEADER_BYTES: usize = 1 + SALT_BYTES + NONCE_BYTES;

fn derive_key(passphrase: &str, salt: &[u8]) -> [u8; KEY_BYTES] {
    let mut key = [0u8; KEY_BYTES];
    pbkdf2_hmac::<Sha256>(passphrase.as_bytes(), salt, PBKDF2_ROUNDS, &mut key);
    key
}

pub fn encrypt_with_passphrase(text: &str, passphrase: &str) -> Result<String, CipherError> {
    let mut salt = [0u8; SALT_BYTES];
    let mut nonce = [0u8; NONCE_BYTES];
    OsRng.fill_bytes(&mut salt);
    OsRng.fill_bytes(&mut nonce);

    let key = derive_key(passphrase, &salt);
    let cipher = Aes256Gcm::new_from_slice(&key).expect("32-byte key");
    let ciphertext = cipher
        .encrypt(Nonce::from_slice(&nonce), text.as_bytes())
        .map_err(|_| CipherError::Decoding {
            reason: "plaintext too large for AES-GCM".to_owned(),
        })?;

    let mut envelope = Vec::with_capacity(HEADER_BYTES + ciphertext.len());
    envelope.push(ENVELOPE_VERSION);
    envelope.extend_from_slice(&salt);
    envelope.extend_from_slice(&nonce);
    envelope.extend_from_slice(&ciphertext);
    Ok(BASE64.encode(envelope))
}

pub fn decrypt_with_passphrase(encoded: &str, passphrase: &str) -> Result<String, CipherError> {
    let envelope = BASE64.decode(encoded).map_err(|err| CipherError::Decoding {
        reason: err.to_string(),
    })?;
    if envelope.len() < HEADER_BYTES + TAG_BYTES {
        return Err(CipherError::Decoding {
            reason: format!("envelope too short: {} bytes", envelope.len()),
        });
    }
    if envelope[0] != ENVELOPE_VERSION {
        return Err(CipherError::Decoding {
            reason: format!("unsupported envelope version {}", envelope[0]),
        });
    }

    let salt = &envelope[1..1 + SALT_BYTES];
    let nonce = &envelope[1 + SALT_BYTES..HEADER_BYTES];
    let ciphertext = &envelope[HEADER_BYTES..];

    let key = derive_key(passphrase, salt);
    let cipher = Aes256Gcm::new_from_slice(&key).expect("32-byte key");
    let plaintext = cipher
        .decrypt(Nonce::from_slice(nonce), ciphertext)
        .map_err(|_| CipherError::WrongKeyOrCorrupt)?;
    String::from_utf8(plaintext).map_err(|_| CipherError::WrongKeyOrCorrupt)
}

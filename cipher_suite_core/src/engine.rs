use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::aead;
use crate::classical;
use crate::encoding;
use crate::morse;
use crate::registry::CipherId;

/// Shift used when a Caesar request or layer carries none.
pub const DEFAULT_CAESAR_SHIFT: i32 = 3;

#[derive(Debug, Error)]
pub enum CipherError {
    #[error("cipher {cipher:?} requires a non-empty key")]
    MissingKey { cipher: CipherId },

    #[error("input could not be decoded: {reason}")]
    Decoding { reason: String },

    #[error("decryption failed: wrong passphrase or corrupted payload")]
    WrongKeyOrCorrupt,

    #[error("cipher {cipher:?} requires a key and cannot be used as a layer")]
    InvalidLayerMember { cipher: CipherId },

    #[error("invalid {name}: {value}")]
    InvalidParameter { name: &'static str, value: i64 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Encrypt,
    Decrypt,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CipherRequest {
    pub cipher: CipherId,
    pub direction: Direction,
    pub text: String,
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub shift: Option<i32>,
}

impl CipherRequest {
    pub fn new(cipher: CipherId, direction: Direction, text: impl Into<String>) -> Self {
        Self {
            cipher,
            direction,
            text: text.into(),
            key: None,
            shift: None,
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn with_shift(mut self, shift: i32) -> Self {
        self.shift = Some(shift);
        self
    }
}

/// A fully validated invocation: key material has already been checked,
/// so applying a kind can only fail inside a codec, never on key checks.
#[derive(Clone, Debug)]
enum CipherKind {
    Caesar { shift: i32 },
    Vigenere { key: String },
    Keyword { key: String },
    Rot13,
    Atbash,
    Morse,
    Base64,
    Aes { passphrase: String },
    Reverse,
}

impl CipherRequest {
    fn kind(&self) -> Result<CipherKind, CipherError> {
        let kind = match self.cipher {
            CipherId::Caesar => CipherKind::Caesar {
                shift: self.shift.unwrap_or(DEFAULT_CAESAR_SHIFT),
            },
            CipherId::Vigenere => CipherKind::Vigenere {
                key: self.require_letter_key()?,
            },
            CipherId::Keyword => CipherKind::Keyword {
                key: self.require_letter_key()?,
            },
            CipherId::Rot13 => CipherKind::Rot13,
            CipherId::Atbash => CipherKind::Atbash,
            CipherId::Morse => CipherKind::Morse,
            CipherId::Base64 => CipherKind::Base64,
            CipherId::Aes => CipherKind::Aes {
                passphrase: self.require_key()?,
            },
            CipherId::Reverse => CipherKind::Reverse,
        };
        Ok(kind)
    }

    fn require_key(&self) -> Result<String, CipherError> {
        match self.key.as_deref() {
            Some(key) if !key.trim().is_empty() => Ok(key.to_owned()),
            _ => Err(CipherError::MissingKey {
                cipher: self.cipher,
            }),
        }
    }

    /// Alphabetic-key ciphers additionally reject keys that normalize to
    /// nothing (e.g. "1234"), which would otherwise apply as a no-op.
    fn require_letter_key(&self) -> Result<String, CipherError> {
        let key = self.require_key()?;
        if classical::normalize_key(&key).is_empty() {
            return Err(CipherError::MissingKey {
                cipher: self.cipher,
            });
        }
        Ok(key)
    }
}

/// Runs one cipher in the requested direction and returns the raw result.
/// Output formatting is a separate step; see [`crate::apply_formatting`].
pub fn transform(request: &CipherRequest) -> Result<String, CipherError> {
    let kind = request.kind()?;
    debug!(
        "transform cipher={:?} direction={:?} len={}",
        request.cipher,
        request.direction,
        request.text.len()
    );
    apply_kind(&kind, request.direction, &request.text)
}

fn apply_kind(
    kind: &CipherKind,
    direction: Direction,
    text: &str,
) -> Result<String, CipherError> {
    let out = match kind {
        CipherKind::Caesar { shift } => match direction {
            Direction::Encrypt => classical::caesar_encrypt(text, *shift),
            Direction::Decrypt => classical::caesar_decrypt(text, *shift),
        },
        CipherKind::Vigenere { key } => match direction {
            Direction::Encrypt => classical::vigenere_encrypt(text, key),
            Direction::Decrypt => classical::vigenere_decrypt(text, key),
        },
        CipherKind::Keyword { key } => match direction {
            Direction::Encrypt => classical::keyword_encrypt(text, key),
            Direction::Decrypt => classical::keyword_decrypt(text, key),
        },
        CipherKind::Rot13 => classical::rot13(text),
        CipherKind::Atbash => classical::atbash(text),
        CipherKind::Morse => match direction {
            Direction::Encrypt => morse::encode(text),
            Direction::Decrypt => morse::decode(text),
        },
        CipherKind::Base64 => match direction {
            Direction::Encrypt => encoding::base64_encode(text),
            Direction::Decrypt => encoding::base64_decode(text)?,
        },
        CipherKind::Aes { passphrase } => match direction {
            Direction::Encrypt => aead::encrypt_with_passphrase(text, passphrase)?,
            Direction::Decrypt => aead::decrypt_with_passphrase(text, passphrase)?,
        },
        CipherKind::Reverse => encoding::reverse(text),
    };
    Ok(out)
}

/// Forward-only application used by layer composition. Key-requiring
/// ciphers are rejected here as well as at chain construction.
pub(crate) fn encrypt_only(
    cipher: CipherId,
    text: &str,
    shift: Option<i32>,
) -> Result<String, CipherError> {
    let out = match cipher {
        CipherId::Caesar => {
            classical::caesar_encrypt(text, shift.unwrap_or(DEFAULT_CAESAR_SHIFT))
        }
        CipherId::Rot13 => classical::rot13(text),
        CipherId::Atbash => classical::atbash(text),
        CipherId::Morse => morse::encode(text),
        CipherId::Base64 => encoding::base64_encode(text),
        CipherId::Reverse => encoding::reverse(text),
        CipherId::Vigenere | CipherId::Keyword | CipherId::Aes => {
            return Err(CipherError::InvalidLayerMember { cipher });
        }
    };
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caesar_request_roundtrip_with_default_shift() {
        let encrypted = transform(&CipherRequest::new(
            CipherId::Caesar,
            Direction::Encrypt,
            "Attack at dawn!",
        ))
        .unwrap();
        assert_eq!(encrypted, "Dwwdfn dw gdzq!");
        let decrypted = transform(&CipherRequest::new(
            CipherId::Caesar,
            Direction::Decrypt,
            encrypted,
        ))
        .unwrap();
        assert_eq!(decrypted, "Attack at dawn!");
    }

    #[test]
    fn missing_key_is_rejected_before_transforming() {
        for cipher in [CipherId::Vigenere, CipherId::Keyword, CipherId::Aes] {
            let request = CipherRequest::new(cipher, Direction::Encrypt, "text");
            let err = transform(&request).unwrap_err();
            assert!(matches!(err, CipherError::MissingKey { cipher: c } if c == cipher));

            let request = CipherRequest::new(cipher, Direction::Encrypt, "text").with_key("   ");
            let err = transform(&request).unwrap_err();
            assert!(matches!(err, CipherError::MissingKey { .. }));
        }
    }

    #[test]
    fn letterless_keys_count_as_missing() {
        for cipher in [CipherId::Vigenere, CipherId::Keyword] {
            let request = CipherRequest::new(cipher, Direction::Encrypt, "text").with_key("12-34");
            assert!(matches!(
                transform(&request),
                Err(CipherError::MissingKey { .. })
            ));
        }
        // An all-digit AES passphrase is unusual but valid.
        let request =
            CipherRequest::new(CipherId::Aes, Direction::Encrypt, "text").with_key("1234");
        assert!(transform(&request).is_ok());
    }

    #[test]
    fn every_keyless_cipher_transforms() {
        for cipher in [
            CipherId::Caesar,
            CipherId::Rot13,
            CipherId::Atbash,
            CipherId::Morse,
            CipherId::Base64,
            CipherId::Reverse,
        ] {
            let request = CipherRequest::new(cipher, Direction::Encrypt, "Hello World");
            assert!(transform(&request).is_ok(), "{cipher:?}");
        }
    }

    #[test]
    fn aes_roundtrip_through_requests() {
        let encrypted = transform(
            &CipherRequest::new(CipherId::Aes, Direction::Encrypt, "payload").with_key("pass"),
        )
        .unwrap();
        let decrypted = transform(
            &CipherRequest::new(CipherId::Aes, Direction::Decrypt, encrypted).with_key("pass"),
        )
        .unwrap();
        assert_eq!(decrypted, "payload");
    }

    #[test]
    fn base64_decrypt_surfaces_decoding_errors() {
        let request = CipherRequest::new(CipherId::Base64, Direction::Decrypt, "%%%");
        assert!(matches!(
            transform(&request),
            Err(CipherError::Decoding { .. })
        ));
    }

    #[test]
    fn encrypt_only_rejects_key_ciphers() {
        for cipher in [CipherId::Vigenere, CipherId::Keyword, CipherId::Aes] {
            let err = encrypt_only(cipher, "text", None).unwrap_err();
            assert!(matches!(err, CipherError::InvalidLayerMember { cipher: c } if c == cipher));
        }
    }

    #[test]
    fn rot13_ignores_direction() {
        let forward = transform(&CipherRequest::new(
            CipherId::Rot13,
            Direction::Encrypt,
            "Gnarly",
        ))
        .unwrap();
        let backward = transform(&CipherRequest::new(
            CipherId::Rot13,
            Direction::Decrypt,
            "Gnarly",
        ))
        .unwrap();
        assert_eq!(forward, backward);
    }
}

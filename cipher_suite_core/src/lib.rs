//! Core cipher and text-transform engine for Cipher Suite.
//!
//! Every operation is a pure function of its inputs: the engine holds no
//! state between calls and the only shared data is the immutable cipher
//! registry. The classical ciphers are known-insecure and exist for
//! education and obfuscation; the AES wrapper is a pass-through to
//! AES-256-GCM and inherits exactly that primitive's properties.

pub mod aead;
pub mod alphabet;
pub mod analysis;
pub mod classical;
pub mod encoding;
pub mod engine;
pub mod format;
pub mod layers;
pub mod morse;
pub mod registry;

pub use crate::analysis::{
    BruteForceCandidate, FrequencyEntry, analyze_frequency, brute_force_caesar,
};
pub use crate::engine::{
    CipherError, CipherRequest, DEFAULT_CAESAR_SHIFT, Direction, transform,
};
pub use crate::format::{FormattingOptions, MAX_GROUP_SIZE, TextCase, apply_formatting};
pub use crate::layers::{Layer, LayerChain, apply_layers};
pub use crate::registry::{
    CipherDescriptor, CipherId, CipherRegistry, StrengthClass, list_ciphers,
};

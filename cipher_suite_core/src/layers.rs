use log::debug;
use serde::{Deserialize, Serialize};

use crate::engine::{self, CipherError};
use crate::registry::{CipherId, CipherRegistry};

/// One stage of a multi-layer composition. Only keyless ciphers qualify;
/// `shift` overrides the Caesar default and is ignored by other ciphers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layer {
    pub cipher: CipherId,
    #[serde(default)]
    pub shift: Option<i32>,
}

impl Layer {
    pub fn new(cipher: CipherId) -> Self {
        Self {
            cipher,
            shift: None,
        }
    }

    pub fn with_shift(cipher: CipherId, shift: i32) -> Self {
        Self {
            cipher,
            shift: Some(shift),
        }
    }
}

/// An ordered sequence of forward-only transforms. Membership is checked
/// at construction, so applying a chain never fails on key validation.
/// There is no inverse: undoing a chain means decrypting each layer
/// manually in reverse order.
// Serialize-only: deserializing a chain would skip membership validation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LayerChain {
    layers: Vec<Layer>,
}

impl LayerChain {
    pub fn new(layers: Vec<Layer>) -> Result<Self, CipherError> {
        let registry = CipherRegistry::standard();
        for layer in &layers {
            if registry.requires_key(layer.cipher) {
                return Err(CipherError::InvalidLayerMember {
                    cipher: layer.cipher,
                });
            }
        }
        Ok(Self { layers })
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

/// Folds the chain left to right, each layer encrypting the previous
/// layer's output.
pub fn apply_layers(text: &str, chain: &LayerChain) -> Result<String, CipherError> {
    let mut result = text.to_owned();
    for (index, layer) in chain.layers().iter().enumerate() {
        result = engine::encrypt_only(layer.cipher, &result, layer.shift)?;
        debug!(
            "layer {} cipher={:?} output_len={}",
            index,
            layer.cipher,
            result.len()
        );
    }
    Ok(result)
}

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CipherId {
    Caesar,
    Vigenere,
    Keyword,
    Rot13,
    Atbash,
    Morse,
    Base64,
    Aes,
    Reverse,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengthClass {
    None,
    Weak,
    Medium,
    Strong,
}

impl StrengthClass {
    /// Human label used by the front ends next to each method.
    pub fn label(self) -> &'static str {
        match self {
            StrengthClass::None => "Not Encryption",
            StrengthClass::Weak => "Weak",
            StrengthClass::Medium => "Medium",
            StrengthClass::Strong => "Strong",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CipherDescriptor {
    pub id: CipherId,
    pub display_name: &'static str,
    pub requires_key: bool,
    pub strength: StrengthClass,
}

// Display order, not a semantic ordering.
static CIPHER_SET: [CipherDescriptor; 9] = [
    CipherDescriptor {
        id: CipherId::Caesar,
        display_name: "Caesar Cipher",
        requires_key: false,
        strength: StrengthClass::Weak,
    },
    CipherDescriptor {
        id: CipherId::Vigenere,
        display_name: "Vigenère Cipher",
        requires_key: true,
        strength: StrengthClass::Medium,
    },
    CipherDescriptor {
        id: CipherId::Keyword,
        display_name: "Keyword Cipher",
        requires_key: true,
        strength: StrengthClass::Weak,
    },
    CipherDescriptor {
        id: CipherId::Rot13,
        display_name: "ROT13",
        requires_key: false,
        strength: StrengthClass::Weak,
    },
    CipherDescriptor {
        id: CipherId::Atbash,
        display_name: "Atbash Cipher",
        requires_key: false,
        strength: StrengthClass::Weak,
    },
    CipherDescriptor {
        id: CipherId::Morse,
        display_name: "Morse Code",
        requires_key: false,
        strength: StrengthClass::None,
    },
    CipherDescriptor {
        id: CipherId::Base64,
        display_name: "Base64",
        requires_key: false,
        strength: StrengthClass::None,
    },
    CipherDescriptor {
        id: CipherId::Aes,
        display_name: "AES Encryption",
        requires_key: true,
        strength: StrengthClass::Strong,
    },
    CipherDescriptor {
        id: CipherId::Reverse,
        display_name: "Reverse Text",
        requires_key: false,
        strength: StrengthClass::None,
    },
];

#[derive(Clone, Copy, Debug)]
pub struct CipherRegistry<'a> {
    ciphers: &'a [CipherDescriptor],
}

impl<'a> CipherRegistry<'a> {
    pub const fn new(ciphers: &'a [CipherDescriptor]) -> Self {
        Self { ciphers }
    }

    pub fn standard() -> CipherRegistry<'static> {
        CipherRegistry {
            ciphers: &CIPHER_SET,
        }
    }

    pub fn ciphers(&self) -> &'a [CipherDescriptor] {
        self.ciphers
    }

    pub fn descriptor(&self, id: CipherId) -> Option<&'a CipherDescriptor> {
        self.ciphers.iter().find(|descriptor| descriptor.id == id)
    }

    pub fn requires_key(&self, id: CipherId) -> bool {
        self.descriptor(id)
            .map_or(false, |descriptor| descriptor.requires_key)
    }
}

/// Returns all available ciphers in display order.
pub fn list_ciphers() -> &'static [CipherDescriptor] {
    &CIPHER_SET
}

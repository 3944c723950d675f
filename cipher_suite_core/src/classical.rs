use crate::alphabet::{reflect_char, shift_char};

pub const ROT13_SHIFT: i32 = 13;

pub fn caesar_encrypt(text: &str, shift: i32) -> String {
    text.chars().map(|c| shift_char(c, shift)).collect()
}

pub fn caesar_decrypt(text: &str, shift: i32) -> String {
    text.chars().map(|c| shift_char(c, -shift)).collect()
}

/// Caesar with the shift fixed at 13. Self-inverse (13 + 13 = 26 = 0),
/// so the same function serves both directions.
pub fn rot13(text: &str) -> String {
    caesar_encrypt(text, ROT13_SHIFT)
}

/// Positional reflection within each case's alphabet. Self-inverse.
pub fn atbash(text: &str) -> String {
    text.chars().map(reflect_char).collect()
}

/// Uppercases a key and strips everything outside A-Z. The result may be
/// empty; key-requiring call sites must reject that before transforming.
pub fn normalize_key(key: &str) -> String {
    key.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

pub fn vigenere_encrypt(text: &str, key: &str) -> String {
    vigenere(text, key, false)
}

pub fn vigenere_decrypt(text: &str, key: &str) -> String {
    vigenere(text, key, true)
}

// The key index advances on letters only: punctuation and spacing never
// consume a key character, which fixes the key/plaintext alignment.
fn vigenere(text: &str, key: &str, decrypt: bool) -> String {
    let clean_key = normalize_key(key);
    if clean_key.is_empty() {
        return text.to_owned();
    }
    let shifts: Vec<i32> = clean_key.bytes().map(|b| (b - b'A') as i32).collect();
    let mut key_index = 0usize;
    text.chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                let mut offset = shifts[key_index % shifts.len()];
                key_index += 1;
                if decrypt {
                    offset = -offset;
                }
                shift_char(c, offset)
            } else {
                c
            }
        })
        .collect()
}

/// Builds the keyword substitution alphabet: the key's letters in first
/// occurrence order with duplicates dropped, then the remaining letters
/// A-Z in natural order. Always a permutation of the 26 uppercase letters.
pub fn keyword_alphabet(key: &str) -> [u8; 26] {
    let mut table = [0u8; 26];
    let mut seen = [false; 26];
    let mut next = 0usize;
    for b in normalize_key(key).bytes() {
        let index = (b - b'A') as usize;
        if !seen[index] {
            seen[index] = true;
            table[next] = b;
            next += 1;
        }
    }
    for index in 0..26 {
        if !seen[index] {
            table[next] = b'A' + index as u8;
            next += 1;
        }
    }
    table
}

pub fn keyword_encrypt(text: &str, key: &str) -> String {
    let table = keyword_alphabet(key);
    substitute(text, &table)
}

pub fn keyword_decrypt(text: &str, key: &str) -> String {
    let table = keyword_alphabet(key);
    let mut inverse = [0u8; 26];
    for (position, &substituted) in table.iter().enumerate() {
        inverse[(substituted - b'A') as usize] = b'A' + position as u8;
    }
    substitute(text, &inverse)
}

// Case of the input character survives independently of the table, which
// is uppercase-only.
fn substitute(text: &str, table: &[u8; 26]) -> String {
    text.chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                let position = (c.to_ascii_uppercase() as u8 - b'A') as usize;
                let mapped = table[position] as char;
                if c.is_ascii_lowercase() {
                    mapped.to_ascii_lowercase()
                } else {
                    mapped
                }
            } else {
                c
            }
        })
        .collect()
}

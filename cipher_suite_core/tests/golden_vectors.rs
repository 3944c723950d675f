//! Known-answer vectors for the public engine surface.

use cipher_suite_core::{
    CipherId, CipherRequest, Direction, FormattingOptions, Layer, LayerChain, TextCase,
    analyze_frequency, apply_formatting, apply_layers, brute_force_caesar, list_ciphers,
    transform,
};

fn encrypt(cipher: CipherId, text: &str) -> CipherRequest {
    CipherRequest::new(cipher, Direction::Encrypt, text)
}

fn decrypt(cipher: CipherId, text: &str) -> CipherRequest {
    CipherRequest::new(cipher, Direction::Decrypt, text)
}

#[test]
fn caesar_vectors() {
    let request = encrypt(CipherId::Caesar, "Attack at dawn!").with_shift(3);
    assert_eq!(transform(&request).unwrap(), "Dwwdfn dw gdzq!");
    let request = decrypt(CipherId::Caesar, "Dwwdfn dw gdzq!").with_shift(3);
    assert_eq!(transform(&request).unwrap(), "Attack at dawn!");
    // Shifts outside 1..25 wrap instead of failing.
    let request = encrypt(CipherId::Caesar, "xyz").with_shift(29);
    assert_eq!(transform(&request).unwrap(), "abc");
}

#[test]
fn rot13_vectors() {
    assert_eq!(
        transform(&encrypt(CipherId::Rot13, "Hello, World!")).unwrap(),
        "Uryyb, Jbeyq!"
    );
    assert_eq!(
        transform(&decrypt(CipherId::Rot13, "Uryyb, Jbeyq!")).unwrap(),
        "Hello, World!"
    );
}

#[test]
fn atbash_vectors() {
    assert_eq!(transform(&encrypt(CipherId::Atbash, "Hello")).unwrap(), "Svool");
    assert_eq!(transform(&decrypt(CipherId::Atbash, "Svool")).unwrap(), "Hello");
}

#[test]
fn vigenere_vectors() {
    let request = encrypt(CipherId::Vigenere, "ATTACKATDAWN").with_key("LEMON");
    assert_eq!(transform(&request).unwrap(), "LXFOPVEFRNHR");
    let request = decrypt(CipherId::Vigenere, "LXFOPVEFRNHR").with_key("LEMON");
    assert_eq!(transform(&request).unwrap(), "ATTACKATDAWN");
    let request = encrypt(CipherId::Vigenere, "HELLO WORLD").with_key("KEY");
    assert_eq!(transform(&request).unwrap(), "RIJVS UYVJN");
}

#[test]
fn keyword_vectors() {
    let request = encrypt(CipherId::Keyword, "Hello, World!").with_key("zebra");
    let encrypted = transform(&request).unwrap();
    assert_eq!(encrypted, "Fajjm, Vmpjr!");
    let request = decrypt(CipherId::Keyword, &encrypted).with_key("zebra");
    assert_eq!(transform(&request).unwrap(), "Hello, World!");
}

#[test]
fn morse_vectors() {
    assert_eq!(
        transform(&encrypt(CipherId::Morse, "SOS")).unwrap(),
        "... --- ..."
    );
    assert_eq!(
        transform(&decrypt(CipherId::Morse, ".... .. / - .... . .-. .")).unwrap(),
        "HI THERE"
    );
}

#[test]
fn base64_vectors() {
    assert_eq!(
        transform(&encrypt(CipherId::Base64, "Hello, World!")).unwrap(),
        "SGVsbG8sIFdvcmxkIQ=="
    );
    assert_eq!(
        transform(&decrypt(CipherId::Base64, "SGVsbG8sIFdvcmxkIQ==")).unwrap(),
        "Hello, World!"
    );
}

#[test]
fn reverse_vector() {
    assert_eq!(
        transform(&encrypt(CipherId::Reverse, "abc def")).unwrap(),
        "fed cba"
    );
}

#[test]
fn formatting_vector() {
    let options = FormattingOptions {
        text_case: TextCase::Upper,
        remove_spaces: true,
        group_size: 5,
    };
    assert_eq!(
        apply_formatting("Dwwdfn dw gdzq", &options),
        "DWWDF NDWGD ZQ"
    );
}

#[test]
fn frequency_vector() {
    let entries = analyze_frequency("AABB");
    assert_eq!(entries.len(), 2);
    assert_eq!((entries[0].letter, entries[0].count), ('A', 2));
    assert_eq!(entries[0].percent, 50.0);
    assert_eq!((entries[1].letter, entries[1].count), ('B', 2));
}

#[test]
fn brute_force_vector() {
    let candidates = brute_force_caesar("Dwwdfn dw gdzq!");
    assert_eq!(candidates.len(), 25);
    assert_eq!(candidates[2].shift, 3);
    assert_eq!(candidates[2].text, "Attack at dawn!");
}

#[test]
fn layer_chain_vector() {
    let chain = LayerChain::new(vec![
        Layer::with_shift(CipherId::Caesar, 1),
        Layer::new(CipherId::Reverse),
        Layer::new(CipherId::Base64),
    ])
    .unwrap();
    // "abc" -> "bcd" -> "dcb" -> base64
    assert_eq!(apply_layers("abc", &chain).unwrap(), "ZGNi");
}

#[test]
fn registry_display_order_matches_the_front_end() {
    let names: Vec<&str> = list_ciphers().iter().map(|d| d.display_name).collect();
    assert_eq!(
        names,
        [
            "Caesar Cipher",
            "Vigenère Cipher",
            "Keyword Cipher",
            "ROT13",
            "Atbash Cipher",
            "Morse Code",
            "Base64",
            "AES Encryption",
            "Reverse Text",
        ]
    );
}

#[test]
fn requests_roundtrip_through_json() {
    let request = encrypt(CipherId::Vigenere, "text").with_key("KEY");
    let encoded = serde_json::to_string(&request).unwrap();
    let decoded: CipherRequest = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded.cipher, request.cipher);
    assert_eq!(decoded.key, request.key);
    assert_eq!(transform(&decoded).unwrap(), transform(&request).unwrap());
}

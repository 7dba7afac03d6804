//! Round trips against an independent OpenSSL encryptor, so a bug shared by our own encrypt and
//! decrypt paths cannot cancel itself out.

use crate::{decrypt, decrypt_text, encoding, encrypt, encrypt_text, Scheme, PASSPHRASE};
use openssl::rand::rand_bytes;
use openssl::symm::{encrypt as openssl_encrypt, Cipher};
use rand::Rng;

fn reference_encrypt(plaintext: &[u8]) -> Vec<u8> {
    let keys = Scheme::FIRMWARE.derive_keys().unwrap();
    openssl_encrypt(Cipher::aes_256_cbc(), &keys.key, Some(&keys.iv[..]), plaintext).unwrap()
}

#[test]
fn random_plaintexts_survive_decode_and_decrypt() {
    let mut rng = rand::thread_rng();

    for len in (0..=64).chain(std::iter::repeat_with(|| rng.gen_range(65..4096)).take(16)) {
        let mut plaintext = vec![0u8; len];
        rand_bytes(&mut plaintext).unwrap();

        let text = encoding::encode(&reference_encrypt(&plaintext));
        let decrypted = decrypt_text(&text).unwrap();

        assert_eq!(plaintext.len(), decrypted.len());
        assert!(plaintext == decrypted, "Mismatch for {} byte plaintext", len);
    }
}

#[test]
fn encrypt_matches_reference() {
    let mut rng = rand::thread_rng();

    for _ in 0..32 {
        let len = rng.gen_range(0..256);
        let plaintext: Vec<u8> = (0..len).map(|_| rng.gen()).collect();

        let ours = encrypt(&plaintext, PASSPHRASE).unwrap();
        assert_eq!(ours.len() % 16, 0);
        assert!(ours.len() > plaintext.len());
        assert!(ours == reference_encrypt(&plaintext));
        assert!(decrypt(&ours, PASSPHRASE).unwrap() == plaintext);
    }
}

#[test]
fn text_round_trip() {
    let plaintext = b"supervisor password: 1234";
    let text = encrypt_text(plaintext).unwrap();
    assert!(!text.contains('\n'));
    assert_eq!(decrypt_text(&text).unwrap(), plaintext);
}

#[test]
fn wrong_passphrase_does_not_return_plaintext() {
    let ciphertext = encrypt(br#"{"pwd":"admin"}"#, PASSPHRASE).unwrap();

    // A wrong key almost always garbles the padding; if it happens to land on a valid padding
    // byte, the output still must not be the plaintext.
    match decrypt(&ciphertext, b"not the firmware key") {
        Err(_) => {}
        Ok(plaintext) => assert!(plaintext != br#"{"pwd":"admin"}"#),
    }
}

//! Checks the derived key material against `EVP_BytesToKey(EVP_aes_256_cbc(), EVP_sha1(), salt,
//! "ThiSISEncryptioNKeY", 5)` as computed by libcrypto.

use crate::kdf::{self, DerivedKeys};
use crate::{Error, Scheme, ITERATIONS, PASSPHRASE, SALT};
use hex_literal::hex;
use openssl::hash::{hash, MessageDigest};

const KEY: [u8; 32] = hex!("2409f885638031108e3df5910185ff1478a0c096a30aa40b83298598b754117c");
const IV: [u8; 16] = hex!("3343d49e41e5ffb35bc0e582ef3fb84a");

#[test]
fn firmware_key_and_iv() -> Result<(), Error> {
    let keys = Scheme::FIRMWARE.derive_keys()?;
    assert_eq!(keys.key, KEY);
    assert_eq!(keys.iv, IV);
    Ok(())
}

#[test]
fn derivation_is_repeatable() -> Result<(), Error> {
    let first = kdf::derive(PASSPHRASE, &SALT, ITERATIONS)?;
    let second = kdf::derive(PASSPHRASE, &SALT, ITERATIONS)?;
    assert!(first == second);
    Ok(())
}

/// Rebuilds the digest stream by hand to pin down the layout: every block is SHA-1 applied
/// `ITERATIONS` times, blocks are chained on the previous block, the key is the first 32 bytes of
/// the stream and the IV the 16 bytes after it.
#[test]
fn key_and_iv_share_one_digest_stream() {
    let mut stream = Vec::new();
    let mut previous: Vec<u8> = Vec::new();
    while stream.len() < kdf::KEY_LEN + kdf::IV_LEN {
        let mut input = previous.clone();
        input.extend_from_slice(PASSPHRASE);
        input.extend_from_slice(&SALT);

        let mut block = hash(MessageDigest::sha1(), &input).unwrap().to_vec();
        for _ in 1..ITERATIONS {
            block = hash(MessageDigest::sha1(), &block).unwrap().to_vec();
        }

        stream.extend_from_slice(&block);
        previous = block;
    }

    assert_eq!(&stream[..32], &KEY[..]);
    assert_eq!(&stream[32..48], &IV[..]);
}

#[test]
fn other_inputs_derive_other_keys() {
    let firmware = Scheme::FIRMWARE.derive_keys().unwrap();
    let other = Scheme::with_passphrase(b"ThiSISEncryptioNKeZ")
        .derive_keys()
        .unwrap();
    let single_round = kdf::derive(PASSPHRASE, &SALT, 1).unwrap();

    assert!(firmware != other);
    assert!(firmware != single_round);
    // `openssl enc -aes-256-cbc -md sha1 -S 000030390000D431 -P` uses a single round
    assert_eq!(
        single_round.key,
        hex!("634781CF486BB71B868C50C39DE662C18D84E298629B72902718526E353F3255")
    );
    assert_eq!(single_round.iv, hex!("3B71536082FB2E91524417B45D860150"));
}

#[test]
fn debug_output_hides_key_material() {
    let keys = DerivedKeys {
        key: KEY,
        iv: IV,
    };
    let rendered = format!("{:?}", keys);
    assert_eq!(rendered, "DerivedKeys { .. }");
}

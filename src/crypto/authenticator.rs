use aes_gcm::aead::{Aead, OsRng};
use aes_gcm::{Aes256Gcm, KeyInit};
use argon2::Argon2;
use log::debug;
use rand::RngCore;
use zeroize::Zeroizing;

use crate::error::{HuffError, Result};

pub const SALT_LEN: usize = 16; // Argon2 salt size
pub const NONCE_LEN: usize = 12; // AES-GCM nonce size
pub const TAG_LEN: usize = 16; // AES-GCM tag size
pub const KEY_LEN: usize = 32; // AES-256 key size
/// Shortest blob that can hold salt, nonce and tag.
pub const MIN_SEALED_LEN: usize = SALT_LEN + NONCE_LEN + TAG_LEN;

/// A derived key. Wiped from memory when dropped.
pub type Key = Zeroizing<[u8; KEY_LEN]>;

/// Argon2id work parameters. They are not stored with the data, so sealing and
/// opening must agree on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KdfParams {
    /// Memory cost in KiB
    pub m_cost: u32,
    /// Iterations
    pub t_cost: u32,
    /// Lanes
    pub p_cost: u32,
}

impl KdfParams {
    pub fn new(m_cost: u32, t_cost: u32, p_cost: u32) -> Self {
        Self {
            m_cost,
            t_cost,
            p_cost,
        }
    }
}

impl Default for KdfParams {
    /// 64 MiB, one pass, four lanes.
    fn default() -> Self {
        Self::new(64 * 1024, 1, 4)
    }
}

/// Seals and opens byte blobs with a password:
/// `salt (16) | nonce (12) | ciphertext | tag (16)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Authenticator {
    params: KdfParams,
}

impl Authenticator {
    pub fn new(params: KdfParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> KdfParams {
        self.params
    }

    /// Derive the key for `password`. A fresh random salt is drawn when none is given.
    /// Returns the key and the salt that was used.
    pub fn derive_key(&self, password: &str, salt: Option<&[u8]>) -> Result<(Key, Vec<u8>)> {
        let salt = match salt {
            Some(s) => s.to_vec(),
            None => {
                let mut s = vec![0u8; SALT_LEN];
                OsRng.fill_bytes(&mut s);
                s
            }
        };
        let params = argon2::Params::new(
            self.params.m_cost,
            self.params.t_cost,
            self.params.p_cost,
            Some(KEY_LEN),
        )
        .map_err(|e| HuffError::KeyDerivation(format!("invalid Argon2 params: {}", e)))?;
        let argon2 = Argon2::new(argon2::Algorithm::Argon2id, argon2::Version::V0x13, params);
        let mut key = Zeroizing::new([0u8; KEY_LEN]);
        argon2
            .hash_password_into(password.as_bytes(), &salt, &mut key[..])
            .map_err(|e| HuffError::KeyDerivation(e.to_string()))?;
        Ok((key, salt))
    }

    /// Seal `plaintext` under a key derived from `password`, with fresh salt and nonce.
    pub fn encrypt(&self, plaintext: &[u8], password: &str) -> Result<Vec<u8>> {
        let (key, salt) = self.derive_key(password, None)?;
        let mut nonce = [0u8; NONCE_LEN];
        OsRng.fill_bytes(&mut nonce);

        let cipher = Aes256Gcm::new_from_slice(&key[..])
            .map_err(|e| HuffError::Cipher(format!("AES-GCM init failed: {}", e)))?;
        let ciphertext = cipher
            .encrypt((&nonce).into(), plaintext)
            .map_err(|e| HuffError::Cipher(format!("AES-GCM encryption failed: {}", e)))?;

        let mut out = Vec::with_capacity(SALT_LEN + NONCE_LEN + ciphertext.len());
        out.extend_from_slice(&salt);
        out.extend_from_slice(&nonce);
        out.extend_from_slice(&ciphertext);
        debug!("Sealed {} bytes into {} bytes", plaintext.len(), out.len());
        Ok(out)
    }

    /// Open a blob made by `encrypt`. A failed tag check means the password is wrong or the
    /// data was altered; the two cannot be told apart.
    pub fn decrypt(&self, blob: &[u8], password: &str) -> Result<Vec<u8>> {
        if blob.len() < MIN_SEALED_LEN {
            return Err(HuffError::MalformedCiphertext {
                len: blob.len(),
                min: MIN_SEALED_LEN,
            });
        }
        let (salt, rest) = blob.split_at(SALT_LEN);
        let (nonce, ciphertext) = rest.split_at(NONCE_LEN);

        let (key, _) = self.derive_key(password, Some(salt))?;
        let cipher = Aes256Gcm::new_from_slice(&key[..])
            .map_err(|e| HuffError::Cipher(format!("AES-GCM init failed: {}", e)))?;
        let plaintext = cipher
            .decrypt(nonce.into(), ciphertext)
            .map_err(|_| HuffError::Authentication)?;
        debug!("Opened {} bytes into {} bytes", blob.len(), plaintext.len());
        Ok(plaintext)
    }
}

#[cfg(test)]
pub(crate) mod test {
    use super::*;

    /// Cheap parameters so the tests do not spend seconds in Argon2.
    pub(crate) fn quick() -> Authenticator {
        Authenticator::new(KdfParams::new(64, 1, 1))
    }

    #[test]
    fn default_params_are_fixed() {
        assert_eq!(KdfParams::default(), KdfParams::new(65536, 1, 4));
    }

    #[test]
    fn same_salt_same_key() {
        let auth = quick();
        let salt = [7u8; SALT_LEN];
        let (k1, s1) = auth.derive_key("hunter2", Some(&salt)).unwrap();
        let (k2, s2) = auth.derive_key("hunter2", Some(&salt)).unwrap();
        assert_eq!(*k1, *k2);
        assert_eq!(s1, salt.to_vec());
        assert_eq!(s1, s2);
    }

    #[test]
    fn different_salt_different_key() {
        let auth = quick();
        let (k1, _) = auth.derive_key("hunter2", Some(&[1u8; SALT_LEN])).unwrap();
        let (k2, _) = auth.derive_key("hunter2", Some(&[2u8; SALT_LEN])).unwrap();
        assert_ne!(*k1, *k2);
    }

    #[test]
    fn fresh_salt_is_generated() {
        let auth = quick();
        let (k1, s1) = auth.derive_key("pw", None).unwrap();
        let (k2, s2) = auth.derive_key("pw", None).unwrap();
        assert_eq!(s1.len(), SALT_LEN);
        assert_ne!(s1, s2);
        assert_ne!(*k1, *k2);
    }

    #[test]
    fn seal_and_open() {
        let auth = quick();
        let sealed = auth.encrypt(b"0101\n----DATA----\n", "secret").unwrap();
        assert_eq!(sealed.len(), MIN_SEALED_LEN + 18);
        assert_eq!(auth.decrypt(&sealed, "secret").unwrap(), b"0101\n----DATA----\n");
    }

    #[test]
    fn sealing_twice_differs() {
        let auth = quick();
        let a = auth.encrypt(b"same", "pw").unwrap();
        let b = auth.encrypt(b"same", "pw").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn wrong_password_fails() {
        let auth = quick();
        let sealed = auth.encrypt(b"payload", "right").unwrap();
        assert!(matches!(
            auth.decrypt(&sealed, "wrong"),
            Err(HuffError::Authentication)
        ));
    }

    #[test]
    fn every_flipped_byte_is_caught() {
        let auth = quick();
        let sealed = auth.encrypt(b"tamper me", "pw").unwrap();
        for i in 0..sealed.len() {
            let mut bad = sealed.clone();
            bad[i] ^= 0x01;
            assert!(
                matches!(auth.decrypt(&bad, "pw"), Err(HuffError::Authentication)),
                "byte {}",
                i
            );
        }
    }

    #[test]
    fn short_blob_fails() {
        let auth = quick();
        assert!(matches!(
            auth.decrypt(&[0u8; MIN_SEALED_LEN - 1], "pw"),
            Err(HuffError::MalformedCiphertext { len: 43, min: 44 })
        ));
        // Exactly salt + nonce + tag is structurally fine but cannot authenticate.
        assert!(matches!(
            auth.decrypt(&[0u8; MIN_SEALED_LEN], "pw"),
            Err(HuffError::Authentication)
        ));
    }
}

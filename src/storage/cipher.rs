use crate::errors::{PersistResult, PersistenceError};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use chacha20poly1305::aead::{Aead, KeyInit};
use chacha20poly1305::{ChaCha20Poly1305, Key, Nonce};
use rand::RngCore;
use rand::rngs::OsRng;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;

pub const KEY_LEN: usize = 32;
const NONCE_LEN: usize = 12;

/// Reversible transform used by `SecureStateStore`.
///
/// `decrypt(encrypt(x)) == x`; tampered or foreign input must fail.
pub trait Cipher {
    fn encrypt(&self, plaintext: &[u8]) -> PersistResult<Vec<u8>>;
    fn decrypt(&self, ciphertext: &[u8]) -> PersistResult<Vec<u8>>;
}

/// ChaCha20-Poly1305 with a random nonce per message.
/// Output layout: `nonce (12 bytes) || ciphertext || tag`.
pub struct ChaChaCipher {
    key: [u8; KEY_LEN],
}

impl ChaChaCipher {
    pub fn from_key(key: [u8; KEY_LEN]) -> Self {
        Self { key }
    }

    pub fn generate() -> Self {
        let mut key = [0u8; KEY_LEN];
        OsRng.fill_bytes(&mut key);
        Self::from_key(key)
    }

    /// Derive the key as SHA-256 of the passphrase.
    pub fn from_passphrase(passphrase: &str) -> Self {
        let digest = Sha256::digest(passphrase.as_bytes());
        let mut key = [0u8; KEY_LEN];
        key.copy_from_slice(&digest);
        Self::from_key(key)
    }

    /// Read a base64 key written by `write_key_file`.
    pub fn load_key_file(path: &Path) -> PersistResult<Self> {
        let text = fs::read_to_string(path).map_err(|e| {
            PersistenceError::KeyFile(format!("cannot read {}: {e}", path.display()))
        })?;
        let raw = STANDARD.decode(text.trim())?;
        let key: [u8; KEY_LEN] = raw.try_into().map_err(|v: Vec<u8>| {
            PersistenceError::KeyFile(format!(
                "{} holds {} bytes, expected {KEY_LEN}",
                path.display(),
                v.len()
            ))
        })?;
        Ok(Self::from_key(key))
    }

    pub fn write_key_file(&self, path: &Path) -> PersistResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| PersistenceError::KeyFile(e.to_string()))?;
        }
        fs::write(path, STANDARD.encode(self.key))
            .map_err(|e| PersistenceError::KeyFile(format!("cannot write {}: {e}", path.display())))
    }

    fn aead(&self) -> ChaCha20Poly1305 {
        ChaCha20Poly1305::new(Key::from_slice(&self.key))
    }
}

impl Cipher for ChaChaCipher {
    fn encrypt(&self, plaintext: &[u8]) -> PersistResult<Vec<u8>> {
        let mut nonce = [0u8; NONCE_LEN];
        OsRng.fill_bytes(&mut nonce);

        let sealed = self
            .aead()
            .encrypt(Nonce::from_slice(&nonce), plaintext)
            .map_err(|e| PersistenceError::Cipher(e.to_string()))?;

        let mut out = Vec::with_capacity(NONCE_LEN + sealed.len());
        out.extend_from_slice(&nonce);
        out.extend_from_slice(&sealed);
        Ok(out)
    }

    fn decrypt(&self, ciphertext: &[u8]) -> PersistResult<Vec<u8>> {
        if ciphertext.len() < NONCE_LEN {
            return Err(PersistenceError::Cipher("payload shorter than nonce".into()));
        }
        let (nonce, sealed) = ciphertext.split_at(NONCE_LEN);
        self.aead()
            .decrypt(Nonce::from_slice(nonce), sealed)
            .map_err(|e| PersistenceError::Cipher(e.to_string()))
    }
}

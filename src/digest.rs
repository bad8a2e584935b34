//! Digest producer - SHA-256 of the password for display and copy.
//!
//! The digest is informational only. Hashing is best-effort: any failure is
//! logged and replaced by [`HASH_ERROR_MESSAGE`] instead of propagating.

use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use secrecy::{ExposeSecret, SecretString};
use sha2::{Digest, Sha256};
use thiserror::Error;

#[cfg(feature = "async")]
use std::sync::Arc;

/// Text shown in the digest field when hashing fails.
pub const HASH_ERROR_MESSAGE: &str = "Error hashing password";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DigestError {
    #[error("Hashing primitive unavailable: {0}")]
    Unavailable(String),
    #[error("Refusing to hash an empty password")]
    EmptyInput,
    #[error("Hashing task failed: {0}")]
    TaskFailed(String),
}

/// A 256-bit digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PasswordDigest {
    bytes: [u8; 32],
}

impl PasswordDigest {
    pub fn new(bytes: [u8; 32]) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.bytes
    }

    /// Render the digest as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        self.bytes.iter().map(|b| format!("{b:02x}")).collect()
    }
}

impl fmt::Display for PasswordDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Hashing primitive used by the digest producer.
///
/// Hosts without a usable primitive can plug in a backend that always
/// fails, e.g. [`UnavailableBackend`].
pub trait DigestBackend: Send + Sync {
    fn digest(&self, data: &[u8]) -> Result<PasswordDigest, DigestError>;
}

/// SHA-256 from the `sha2` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Backend;

impl DigestBackend for Sha256Backend {
    fn digest(&self, data: &[u8]) -> Result<PasswordDigest, DigestError> {
        let hash = Sha256::digest(data);
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&hash);
        Ok(PasswordDigest::new(bytes))
    }
}

/// Backend for execution contexts that have no hashing primitive.
#[derive(Debug, Clone)]
pub struct UnavailableBackend {
    reason: String,
}

impl UnavailableBackend {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl DigestBackend for UnavailableBackend {
    fn digest(&self, _data: &[u8]) -> Result<PasswordDigest, DigestError> {
        Err(DigestError::Unavailable(self.reason.clone()))
    }
}

/// What the digest field displays: a hex digest or the error sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DigestOutput {
    Hex(String),
    Failed,
}

impl DigestOutput {
    pub fn as_str(&self) -> &str {
        match self {
            DigestOutput::Hex(hex) => hex,
            DigestOutput::Failed => HASH_ERROR_MESSAGE,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, DigestOutput::Failed)
    }
}

impl fmt::Display for DigestOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Result<PasswordDigest, DigestError>> for DigestOutput {
    fn from(result: Result<PasswordDigest, DigestError>) -> Self {
        match result {
            Ok(digest) => DigestOutput::Hex(digest.to_hex()),
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::error!("Hashing failed: {}", _e);
                DigestOutput::Failed
            }
        }
    }
}

/// Hashes the UTF-8 bytes of `password`.
///
/// # Errors
///
/// Returns [`DigestError::EmptyInput`] for an empty password, or whatever
/// the backend reports.
pub fn try_digest_password<B>(
    password: &SecretString,
    backend: &B,
) -> Result<PasswordDigest, DigestError>
where
    B: DigestBackend + ?Sized,
{
    let pwd = password.expose_secret();
    if pwd.is_empty() {
        return Err(DigestError::EmptyInput);
    }
    backend.digest(pwd.as_bytes())
}

/// Best-effort digest: never fails, falls back to [`HASH_ERROR_MESSAGE`].
///
/// A backend that panics is treated like one that returned an error.
pub fn digest_password<B>(password: &SecretString, backend: &B) -> DigestOutput
where
    B: DigestBackend + ?Sized,
{
    let result = panic::catch_unwind(AssertUnwindSafe(|| try_digest_password(password, backend)));
    match result {
        Ok(result) => result.into(),
        Err(_) => {
            let failed: Result<PasswordDigest, _> =
                Err(DigestError::TaskFailed("hashing backend panicked".to_string()));
            failed.into()
        }
    }
}

/// Runs [`digest_password`] on the blocking pool so callers never wait on
/// the hash before updating the criteria.
#[cfg(feature = "async")]
pub async fn digest_password_async(
    password: SecretString,
    backend: Arc<dyn DigestBackend>,
) -> DigestOutput {
    let handle =
        tokio::task::spawn_blocking(move || try_digest_password(&password, backend.as_ref()));

    match handle.await {
        Ok(result) => result.into(),
        Err(e) => {
            let failed: Result<PasswordDigest, _> = Err(DigestError::TaskFailed(e.to_string()));
            failed.into()
        }
    }
}

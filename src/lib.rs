//! Password strength meter library
//!
//! Scores a password against five composition criteria, maps the score to a
//! strength tier for display, and computes a SHA-256 digest of the input for
//! display and copy. The digest is informational only.
//!
//! # Features
//!
//! - `async` (default): Enables async digest computation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust,no_run
//! use std::time::Instant;
//! use pwd_meter::{PasswordMeter, Sha256Backend, render};
//! use secrecy::SecretString;
//!
//! let mut meter = PasswordMeter::default();
//!
//! // Criteria and score are applied immediately
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! if let Some(request) = meter.on_input(password) {
//!     // The digest is computed independently and fed back
//!     let outcome = request.compute(&Sha256Backend);
//!     meter.apply_digest(outcome);
//! }
//!
//! let view = render(meter.state(), Instant::now());
//! println!("Strength: {}", view.strength_text);
//! println!("Digest: {}", view.digest_field);
//! ```

// Internal modules
mod clipboard;
mod digest;
mod evaluator;
mod meter;
mod presentation;
mod sections;
mod types;

// Public API
pub use clipboard::{Clipboard, ClipboardError, CopyOutcome, MemoryClipboard};
pub use digest::{
    DigestBackend, DigestError, DigestOutput, HASH_ERROR_MESSAGE, PasswordDigest, Sha256Backend,
    UnavailableBackend, digest_password, try_digest_password,
};
pub use evaluator::evaluate_password_strength;
pub use meter::{
    DEFAULT_COPY_FEEDBACK, DigestOutcome, DigestRequest, MeterConfig, MeterState, PasswordMeter,
    Visibility,
};
pub use presentation::{
    ChecklistIcon, ChecklistItem, MeterView, StrengthTier, checklist, fill_percent, render,
};
pub use sections::MIN_LENGTH;
pub use types::{Criteria, Criterion, PasswordEvaluation, PasswordScore, PasswordStrength};

#[cfg(feature = "async")]
pub use digest::digest_password_async;

#[cfg(feature = "async")]
pub use evaluator::evaluate_password_strength_tx;

#[cfg(feature = "async")]
pub use meter::digest_password_tx;

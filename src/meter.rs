//! Meter session - owns the state behind one password field.
//!
//! Every input change runs the evaluation synchronously and hands back a
//! [`DigestRequest`] that the host computes whenever it likes. Each request
//! carries a monotonic sequence number; outcomes from superseded requests
//! are dropped by [`PasswordMeter::apply_digest`] so a slow hash can never
//! overwrite the digest of a newer input.

use std::time::{Duration, Instant};

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use std::sync::Arc;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::clipboard::{Clipboard, CopyOutcome};
use crate::digest::{DigestBackend, DigestOutput, digest_password};
use crate::evaluator::evaluate_password_strength;
use crate::types::PasswordEvaluation;

#[cfg(feature = "async")]
use crate::digest::digest_password_async;

/// Default time the "copied" confirmation stays visible.
pub const DEFAULT_COPY_FEEDBACK: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeterConfig {
    /// How long the copy confirmation is shown.
    pub copy_feedback: Duration,
    /// Drop digest outcomes that belong to an older input. Disabling this
    /// keeps last-writer-wins, where a slow hash may show a stale digest.
    pub discard_stale_digests: bool,
}

impl Default for MeterConfig {
    fn default() -> Self {
        Self {
            copy_feedback: DEFAULT_COPY_FEEDBACK,
            discard_stale_digests: true,
        }
    }
}

/// Whether the password field shows its content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Masked,
    Plain,
}

impl Visibility {
    pub fn toggled(self) -> Self {
        match self {
            Visibility::Masked => Visibility::Plain,
            Visibility::Plain => Visibility::Masked,
        }
    }
}

/// Everything the view is rendered from.
#[derive(Debug, Clone, Default)]
pub struct MeterState {
    evaluation: PasswordEvaluation,
    digest: Option<DigestOutput>,
    visibility: Visibility,
    copy_confirmed_until: Option<Instant>,
}

impl MeterState {
    pub fn evaluation(&self) -> &PasswordEvaluation {
        &self.evaluation
    }

    /// `None` while the digest field is empty.
    pub fn digest(&self) -> Option<&DigestOutput> {
        self.digest.as_ref()
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Instant at which the copy confirmation disappears, if one is shown.
    pub fn copy_confirmation_deadline(&self) -> Option<Instant> {
        self.copy_confirmed_until
    }

    pub fn copy_confirmation_visible(&self, now: Instant) -> bool {
        self.copy_confirmed_until.is_some_and(|until| now < until)
    }

    fn reset(&mut self) {
        self.evaluation = PasswordEvaluation::not_evaluated();
        self.digest = None;
    }
}

/// Pending digest computation for one input.
pub struct DigestRequest {
    sequence: u64,
    password: SecretString,
    #[cfg(feature = "async")]
    token: CancellationToken,
}

impl DigestRequest {
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Cancelled as soon as a newer input arrives, unless the meter keeps
    /// stale digests.
    #[cfg(feature = "async")]
    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    /// Hashes on the current thread. A panicking backend yields the error
    /// sentinel, as on the async path.
    pub fn compute<B>(&self, backend: &B) -> DigestOutcome
    where
        B: DigestBackend + ?Sized,
    {
        DigestOutcome {
            sequence: self.sequence,
            output: digest_password(&self.password, backend),
        }
    }

    /// Hashes on the blocking pool. Returns `None` when the request was
    /// cancelled before the hash finished.
    #[cfg(feature = "async")]
    pub async fn compute_async(self, backend: Arc<dyn DigestBackend>) -> Option<DigestOutcome> {
        let DigestRequest {
            sequence,
            password,
            token,
        } = self;

        if token.is_cancelled() {
            return None;
        }

        let output = token
            .run_until_cancelled(digest_password_async(password, backend))
            .await;

        #[cfg(feature = "tracing")]
        if output.is_none() {
            tracing::debug!("digest request {} cancelled", sequence);
        }

        output.map(|output| DigestOutcome { sequence, output })
    }
}

/// Finished digest, tagged with the request it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestOutcome {
    pub sequence: u64,
    pub output: DigestOutput,
}

/// State machine behind one password field.
#[derive(Default)]
pub struct PasswordMeter {
    config: MeterConfig,
    state: MeterState,
    sequence: u64,
    #[cfg(feature = "async")]
    in_flight: Option<CancellationToken>,
}

impl PasswordMeter {
    pub fn new(config: MeterConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &MeterConfig {
        &self.config
    }

    pub fn state(&self) -> &MeterState {
        &self.state
    }

    /// Sequence number of the latest input.
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Handles an input change.
    ///
    /// The evaluation is applied before this returns. An empty password
    /// resets the meter and returns `None`; otherwise the returned request
    /// must be computed and fed back through [`PasswordMeter::apply_digest`].
    pub fn on_input(&mut self, password: SecretString) -> Option<DigestRequest> {
        self.sequence += 1;

        #[cfg(feature = "async")]
        if let Some(token) = self.in_flight.take() {
            // last-writer-wins lets superseded hashes run to completion
            if self.config.discard_stale_digests {
                token.cancel();
            }
        }

        if password.expose_secret().is_empty() {
            self.state.reset();
            return None;
        }

        #[cfg(feature = "async")]
        let evaluation = evaluate_password_strength(&password, None);

        #[cfg(not(feature = "async"))]
        let evaluation = evaluate_password_strength(&password);

        self.state.evaluation = evaluation;

        #[cfg(feature = "async")]
        let token = {
            let token = CancellationToken::new();
            self.in_flight = Some(token.clone());
            token
        };

        Some(DigestRequest {
            sequence: self.sequence,
            password,
            #[cfg(feature = "async")]
            token,
        })
    }

    /// Writes a finished digest into the digest field.
    ///
    /// Returns `false` when the outcome was discarded as stale.
    pub fn apply_digest(&mut self, outcome: DigestOutcome) -> bool {
        if self.config.discard_stale_digests && outcome.sequence != self.sequence {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                "discarding stale digest {} (latest {})",
                outcome.sequence,
                self.sequence
            );
            return false;
        }

        #[cfg(feature = "async")]
        if outcome.sequence == self.sequence {
            self.in_flight = None;
        }

        self.state.digest = Some(outcome.output);
        true
    }

    /// Switches between masked and plaintext display.
    pub fn toggle_visibility(&mut self) -> Visibility {
        self.state.visibility = self.state.visibility.toggled();
        self.state.visibility
    }

    /// Copies the digest field to `clipboard`.
    ///
    /// Only a successful primary copy starts the confirmation; failures are
    /// logged and otherwise silent.
    pub fn copy_digest<C>(&mut self, clipboard: &mut C, now: Instant) -> CopyOutcome
    where
        C: Clipboard + ?Sized,
    {
        let Some(text) = self.state.digest.as_ref().map(DigestOutput::as_str) else {
            return CopyOutcome::NothingToCopy;
        };

        match clipboard.write_text(text) {
            Ok(()) => {
                self.state.copy_confirmed_until = Some(now + self.config.copy_feedback);
                CopyOutcome::Copied
            }
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::error!("Failed to copy text: {}", _e);

                match clipboard.fallback_copy(text) {
                    Ok(()) => CopyOutcome::CopiedWithFallback,
                    Err(_e) => {
                        #[cfg(feature = "tracing")]
                        tracing::error!("Fallback copy failed: {}", _e);
                        CopyOutcome::Failed
                    }
                }
            }
        }
    }
}

/// Computes `request` and sends the outcome via channel.
///
/// Cancelled requests send nothing.
#[cfg(feature = "async")]
pub async fn digest_password_tx(
    request: DigestRequest,
    backend: Arc<dyn DigestBackend>,
    tx: mpsc::Sender<DigestOutcome>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("digest {} is about to start...", request.sequence());

    let Some(outcome) = request.compute_async(backend).await else {
        return;
    };

    if let Err(_e) = tx.send(outcome).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send digest outcome: {}", _e);
    }
}

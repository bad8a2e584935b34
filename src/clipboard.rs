//! Clipboard seam used by the copy-digest action.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("Clipboard unavailable")]
    Unavailable,
    #[error("Failed to copy text: {0}")]
    WriteFailed(String),
    #[error("Fallback copy not supported")]
    FallbackUnsupported,
}

/// Implemented by the host adapter.
pub trait Clipboard {
    /// Primary copy path.
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;

    /// Legacy path tried after `write_text` fails. A fallback copy never
    /// shows the confirmation.
    fn fallback_copy(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::FallbackUnsupported)
    }
}

/// Result of a copy action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// The digest field was empty.
    NothingToCopy,
    Copied,
    CopiedWithFallback,
    Failed,
}

impl CopyOutcome {
    pub fn shows_confirmation(self) -> bool {
        self == CopyOutcome::Copied
    }
}

/// In-process clipboard, for headless hosts.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_clipboard_stores_text() {
        let mut clipboard = MemoryClipboard::new();
        assert_eq!(clipboard.contents(), None);
        clipboard.write_text("abc").unwrap();
        assert_eq!(clipboard.contents(), Some("abc"));
    }

    #[test]
    fn test_default_fallback_is_unsupported() {
        let mut clipboard = MemoryClipboard::new();
        assert_eq!(
            clipboard.fallback_copy("abc"),
            Err(ClipboardError::FallbackUnsupported)
        );
    }

    #[test]
    fn test_only_primary_copy_shows_confirmation() {
        assert!(CopyOutcome::Copied.shows_confirmation());
        assert!(!CopyOutcome::CopiedWithFallback.shows_confirmation());
        assert!(!CopyOutcome::Failed.shows_confirmation());
        assert!(!CopyOutcome::NothingToCopy.shows_confirmation());
    }
}

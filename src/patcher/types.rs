//! Patcher type definitions

/// Title and message shown for one auth error code
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AuthErrorMessage {
    /// Error code reported by the auth provider (e.g. `auth/weak-password`)
    pub code: &'static str,
    pub title: &'static str,
    pub message: &'static str,
}

/// What a patch run did to the file content
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PatchOutcome {
    /// The legacy block was found and replaced
    Applied { replacements: usize },
    /// Legacy block absent (never present, or already patched)
    Unchanged,
}

impl PatchOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, PatchOutcome::Applied { .. })
    }
}

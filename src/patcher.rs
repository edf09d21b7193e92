//! Auth error message patcher
//!
//! Replaces the legacy catch block of the sign-in page with one that gives
//! every known auth error code its own title and message.
//!
//! ## Module Structure
//! - `types.rs`: AuthErrorMessage, PatchOutcome
//! - `pure/`: Message table, block rendering, regex substitution
//! - `operations.rs`: Read-patch-write of the target file

mod operations;
mod pure;
mod types;

pub use types::{AuthErrorMessage, PatchOutcome};

pub use operations::patch_file;
pub use pure::{
    AUTH_ERROR_MESSAGES, DEFAULT_MESSAGE, DEFAULT_TITLE, LEGACY_ERROR_HANDLING, apply_patch,
    render_error_handling,
};

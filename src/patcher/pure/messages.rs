//! Auth error code table
//!
//! Ordered as the branches appear in the rendered catch block.

use super::super::types::AuthErrorMessage;

pub const DEFAULT_TITLE: &str = "Oops! Something Went Wrong";
pub const DEFAULT_MESSAGE: &str = "Please try again in a moment.";

pub const AUTH_ERROR_MESSAGES: &[AuthErrorMessage] = &[
    AuthErrorMessage {
        code: "auth/email-already-in-use",
        title: "Email Already Registered",
        message: "This email is already in use. Try signing in or use a different email.",
    },
    AuthErrorMessage {
        code: "auth/invalid-email",
        title: "Invalid Email",
        message: "Please enter a valid email address.",
    },
    AuthErrorMessage {
        code: "auth/wrong-password",
        title: "Incorrect Password",
        message: "The password you entered is incorrect. Try again or reset your password.",
    },
    AuthErrorMessage {
        code: "auth/user-not-found",
        title: "Account Not Found",
        message: "No account exists with this email. Please sign up first.",
    },
    AuthErrorMessage {
        code: "auth/invalid-credential",
        title: "Invalid Login Details",
        message: "Your email or password is incorrect. Please check and try again.",
    },
    AuthErrorMessage {
        code: "auth/too-many-requests",
        title: "Too Many Attempts",
        message: "Please wait a few minutes before trying again.",
    },
    AuthErrorMessage {
        code: "auth/network-request-failed",
        title: "Connection Issue",
        message: "Please check your internet connection and try again.",
    },
    AuthErrorMessage {
        code: "auth/weak-password",
        title: "Weak Password",
        message: "Please choose a stronger password with at least 6 characters.",
    },
];

impl AuthErrorMessage {
    /// Resolve the (title, message) pair the patched page shows for `code`
    ///
    /// Unknown codes fall through to the generic defaults, same as the
    /// rendered `if`/`else if` chain.
    pub fn for_code(code: &str) -> (&'static str, &'static str) {
        AUTH_ERROR_MESSAGES
            .iter()
            .find(|entry| entry.code == code)
            .map(|entry| (entry.title, entry.message))
            .unwrap_or((DEFAULT_TITLE, DEFAULT_MESSAGE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_wrong_password_split_from_user_not_found() {
        let (wrong_title, _) = AuthErrorMessage::for_code("auth/wrong-password");
        let (missing_title, _) = AuthErrorMessage::for_code("auth/user-not-found");
        assert_eq!(wrong_title, "Incorrect Password");
        assert_eq!(missing_title, "Account Not Found");
    }

    #[test]
    fn test_unknown_code_uses_defaults() {
        assert_eq!(
            AuthErrorMessage::for_code("auth/operation-not-allowed"),
            (DEFAULT_TITLE, DEFAULT_MESSAGE)
        );
        assert_eq!(
            AuthErrorMessage::for_code(""),
            (DEFAULT_TITLE, DEFAULT_MESSAGE)
        );
    }

    #[test]
    fn test_codes_are_unique() {
        let codes: HashSet<&str> = AUTH_ERROR_MESSAGES.iter().map(|e| e.code).collect();
        assert_eq!(codes.len(), AUTH_ERROR_MESSAGES.len());
    }

    #[test]
    fn test_messages_are_quote_free() {
        // Entries are spliced into double-quoted TS string literals
        for entry in AUTH_ERROR_MESSAGES {
            assert!(!entry.title.contains('"'), "{}", entry.code);
            assert!(!entry.message.contains('"'), "{}", entry.code);
        }
    }
}

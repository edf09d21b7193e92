//! Catch block rendering and substitution

use std::sync::LazyLock;

use regex::{NoExpand, Regex};

use super::super::types::PatchOutcome;
use super::messages::{AUTH_ERROR_MESSAGES, DEFAULT_MESSAGE, DEFAULT_TITLE};

/// Catch block shipped before per-code titles existed
///
/// `auth/wrong-password` and `auth/user-not-found` share a branch here and
/// every failure is titled "Authentication Failed".
pub const LEGACY_ERROR_HANDLING: &str = concat!(
    "    } catch (error: any) {\n",
    "      console.error(\"Auth error:\", error);\n",
    "      let message = \"Please try again.\";\n",
    "      if (error.code === \"auth/email-already-in-use\") {\n",
    "        message = \"This email is already registered. Try signing in instead.\";\n",
    "      } else if (error.code === \"auth/invalid-email\") {\n",
    "        message = \"Please enter a valid email address.\";\n",
    "      } else if (error.code === \"auth/wrong-password\" || error.code === \"auth/user-not-found\") {\n",
    "        message = \"Invalid email or password.\";\n",
    "      } else if (error.code === \"auth/invalid-credential\") {\n",
    "        message = \"Invalid email or password.\";\n",
    "      }\n",
    "      toast({\n",
    "        title: \"Authentication Failed\",\n",
    "        description: message,\n",
    "        variant: \"destructive\",\n",
    "      });",
);

static LEGACY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&regex::escape(LEGACY_ERROR_HANDLING)).expect("escaped literal is a valid regex")
});

/// Render the replacement catch block from the message table
pub fn render_error_handling() -> String {
    let branches: String = AUTH_ERROR_MESSAGES
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let opener = if i == 0 { "if" } else { "} else if" };
            format!(
                "      {} (error.code === \"{}\") {{\n        title = \"{}\";\n        message = \"{}\";\n",
                opener, entry.code, entry.title, entry.message
            )
        })
        .collect();

    format!(
        concat!(
            "    }} catch (error: any) {{\n",
            "      console.error(\"Auth error:\", error);\n",
            "      let title = \"{}\";\n",
            "      let message = \"{}\";\n",
            "      \n",
            "{}",
            "      }}\n",
            "      \n",
            "      toast({{\n",
            "        title,\n",
            "        description: message,\n",
            "        variant: \"destructive\",\n",
            "      }});",
        ),
        DEFAULT_TITLE, DEFAULT_MESSAGE, branches
    )
}

/// Swap every occurrence of the legacy catch block for the rendered one
///
/// Content without the legacy block comes back untouched.
pub fn apply_patch(content: &str) -> (String, PatchOutcome) {
    let replacements = LEGACY_PATTERN.find_iter(content).count();
    if replacements == 0 {
        return (content.to_string(), PatchOutcome::Unchanged);
    }

    let replacement = render_error_handling();
    let patched = LEGACY_PATTERN
        .replace_all(content, NoExpand(&replacement))
        .into_owned();
    (patched, PatchOutcome::Applied { replacements })
}

//! Store actions.
//!
//! Every state change is expressed as one of these named, immutable
//! instructions. Actions also have a JSON wire form (adjacently tagged,
//! camelCase) so completions and fixtures can describe state changes as
//! data; a tag outside the recognized set deserializes to [`Action::Unknown`],
//! which the transition rejects instead of silently ignoring.

use serde::{Deserialize, Serialize};

use crate::email::{Email, EmailId, EmailPatch};

/// A named instruction describing one state change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum Action {
    // Session
    /// Sets the session presence flag.
    SetLoggedIn(bool),
    /// Clears the session presence flag; emails and selection are kept.
    SetLoggedOut,

    // Loading flags
    /// Marks the list collection fetch as in flight (or not).
    SetLoadingEmails(bool),
    /// Marks the single-email detail fetch as in flight (or not).
    SetLoadingEmail(bool),

    // List mutation
    /// Replaces the email list wholesale; selection is untouched.
    SetEmails(Vec<Email>),
    /// Empties the email list.
    ClearEmails,
    /// Removes the matching entry; no-op if absent. Selection is untouched
    /// even when it referenced the removed entry.
    RemoveEmail(EmailId),
    /// Merges a partial update into the matching entry; no-op if absent.
    UpdateEmail {
        /// Target email.
        id: EmailId,
        /// Fields to merge.
        patch: EmailPatch,
    },

    // Selection
    /// Replaces the selected email wholesale.
    SetSelectedEmail(Option<Email>),

    /// Catch-all for unrecognized wire tags. Always rejected by the
    /// transition; never construct this directly.
    #[serde(other)]
    Unknown,
}

impl Action {
    /// The wire tag of this action, for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SetLoggedIn(_) => "setLoggedIn",
            Self::SetLoggedOut => "setLoggedOut",
            Self::SetLoadingEmails(_) => "setLoadingEmails",
            Self::SetLoadingEmail(_) => "setLoadingEmail",
            Self::SetEmails(_) => "setEmails",
            Self::ClearEmails => "clearEmails",
            Self::RemoveEmail(_) => "removeEmail",
            Self::UpdateEmail { .. } => "updateEmail",
            Self::SetSelectedEmail(_) => "setSelectedEmail",
            Self::Unknown => "unknown",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn wire_round_trip() {
        let action = Action::RemoveEmail(EmailId(4));
        let json = serde_json::to_string(&action).unwrap();
        assert_eq!(json, r#"{"type":"removeEmail","payload":4}"#);

        let back: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(back, action);
    }

    #[test]
    fn update_email_carries_id_and_patch() {
        let json = r#"{
            "type": "updateEmail",
            "payload": { "id": 2, "patch": { "subject": "X" } }
        }"#;

        let action: Action = serde_json::from_str(json).unwrap();
        match action {
            Action::UpdateEmail { id, patch } => {
                assert_eq!(id, EmailId(2));
                assert_eq!(patch.subject.as_deref(), Some("X"));
                assert_eq!(patch.is_read, None);
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[test]
    fn unrecognized_tag_becomes_unknown() {
        let action: Action = serde_json::from_str(r#"{"type":"archiveAll"}"#).unwrap();
        assert_eq!(action, Action::Unknown);
        assert_eq!(action.name(), "unknown");
    }
}

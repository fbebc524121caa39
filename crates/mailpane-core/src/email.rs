//! Email read model: the entity the store holds, plus its partial-update
//! record.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for an email.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct EmailId(pub u64);

impl std::fmt::Display for EmailId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single email as the presentation layer sees it.
///
/// Read-only from the store's perspective: the store moves these values
/// around but never derives new ones. Fields the store does not interpret
/// travel in `extra` untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Email {
    /// Unique identifier within the mailbox.
    pub id: EmailId,
    /// Sender display name.
    pub from_name: String,
    /// Sender email address.
    pub from_email: String,
    /// Subject line.
    pub subject: String,
    /// Plain-text body.
    pub body: String,
    /// Receive timestamp.
    pub received_at: DateTime<Utc>,
    /// Whether the email has been read.
    #[serde(default)]
    pub is_read: bool,
    /// Whether the email is flagged/starred.
    #[serde(default)]
    pub is_flagged: bool,
    /// Additional fields opaque to the store.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Partial update for a single email, applied by the `updateEmail` action.
///
/// Absent fields leave the target untouched; `extra` entries are merged
/// key-wise over the target's opaque fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailPatch {
    /// Replacement subject line.
    pub subject: Option<String>,
    /// Replacement body text.
    pub body: Option<String>,
    /// Replacement read flag.
    pub is_read: Option<bool>,
    /// Replacement flagged/starred flag.
    pub is_flagged: Option<bool>,
    /// Opaque fields to merge in.
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl EmailPatch {
    /// Applies this patch to an email in place.
    pub fn apply(&self, email: &mut Email) {
        if let Some(subject) = &self.subject {
            email.subject.clone_from(subject);
        }
        if let Some(body) = &self.body {
            email.body.clone_from(body);
        }
        if let Some(is_read) = self.is_read {
            email.is_read = is_read;
        }
        if let Some(is_flagged) = self.is_flagged {
            email.is_flagged = is_flagged;
        }
        for (key, value) in &self.extra {
            email.extra.insert(key.clone(), value.clone());
        }
    }

    /// Patch that marks an email as read.
    #[must_use]
    pub fn read() -> Self {
        Self {
            is_read: Some(true),
            ..Self::default()
        }
    }
}

impl Email {
    /// Creates the deterministic sample mailbox used by the demo gateway.
    #[must_use]
    #[allow(clippy::too_many_lines)]
    pub fn sample_inbox() -> Vec<Self> {
        let now = Utc::now();
        vec![
            Self {
                id: EmailId(1),
                from_name: "Priya Raman".into(),
                from_email: "priya@orbitworks.dev".into(),
                subject: "Staging deploy is unblocked".into(),
                body: "Hi,\n\nThe migration that was holding up staging finished \
                       overnight, so the deploy pipeline is green again. I went \
                       ahead and pushed the pending release branch.\n\nIf you see \
                       anything odd in the morning smoke tests, ping me before \
                       rolling back; the cache warm-up takes about twenty minutes \
                       and a rollback during that window looks worse than it is.\n\n\
                       Priya"
                    .into(),
                received_at: now - Duration::minutes(24),
                is_read: false,
                is_flagged: false,
                extra: serde_json::Map::new(),
            },
            Self {
                id: EmailId(2),
                from_name: "Jonas Keller".into(),
                from_email: "jonas.keller@ferrodyne.io".into(),
                subject: "Re: Q3 vendor contract".into(),
                body: "Thanks for the redlines. Legal accepted all of them except \
                       the liability cap in section 7, where they want the original \
                       wording kept.\n\nCan we get a signed copy back by Friday? \
                       Procurement closes their quarter that day and I'd rather not \
                       chase a counter-signature in August.\n\nJonas"
                    .into(),
                received_at: now - Duration::hours(3),
                is_read: false,
                is_flagged: true,
                extra: serde_json::Map::new(),
            },
            Self {
                id: EmailId(3),
                from_name: "Build Bot".into(),
                from_email: "ci@orbitworks.dev".into(),
                subject: "Nightly build #4821 passed".into(),
                body: "All 1,932 tests passed in 14m 02s.\nArtifacts are available \
                       for 30 days."
                    .into(),
                received_at: now - Duration::hours(9),
                is_read: true,
                is_flagged: false,
                extra: serde_json::Map::new(),
            },
            Self {
                id: EmailId(4),
                from_name: "Mara Lindqvist".into(),
                from_email: "mara@nordsjofoto.se".into(),
                subject: "Prints from the archipelago shoot".into(),
                body: "Hello!\n\nThe prints came back from the lab and they look \
                       wonderful, especially the long exposure from the ferry deck. \
                       I put the whole set in the shared folder.\n\nLet me know \
                       which three you want framed and I'll order the mounts this \
                       week. The framer is closed the last week of the month, so \
                       earlier is better.\n\nMara"
                    .into(),
                received_at: now - Duration::days(1),
                is_read: true,
                is_flagged: false,
                extra: serde_json::Map::new(),
            },
            Self {
                id: EmailId(5),
                from_name: "Accounts".into(),
                from_email: "no-reply@cloudmetric.com".into(),
                subject: "Your July invoice is ready".into(),
                body: "Your invoice for July is now available.\n\nTotal: $128.40\n\
                       Payment will be collected automatically from the card on \
                       file on 10 August."
                    .into(),
                received_at: now - Duration::days(2),
                is_read: true,
                is_flagged: false,
                extra: serde_json::Map::new(),
            },
            Self {
                id: EmailId(6),
                from_name: "Tomás Aguilar".into(),
                from_email: "tomas.aguilar@lumenpress.org".into(),
                subject: "Draft chapter for review".into(),
                body: "Attached is the draft of chapter five. It still reads rough \
                       in the middle section where the two timelines cross; I left \
                       margin notes where I think cuts are safe.\n\nNo rush — end \
                       of next week is fine. And thank you again for the last \
                       round, the pacing notes made a real difference.\n\nTomás"
                    .into(),
                received_at: now - Duration::days(4),
                is_read: true,
                is_flagged: true,
                extra: serde_json::Map::new(),
            },
        ]
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn email(id: u64) -> Email {
        Email {
            id: EmailId(id),
            from_name: "Sender".into(),
            from_email: "sender@example.com".into(),
            subject: "Subject".into(),
            body: "Body".into(),
            received_at: Utc::now(),
            is_read: false,
            is_flagged: false,
            extra: serde_json::Map::new(),
        }
    }

    mod patch_tests {
        use super::*;

        #[test]
        fn applies_only_present_fields() {
            let mut target = email(1);
            let patch = EmailPatch {
                subject: Some("Changed".into()),
                ..EmailPatch::default()
            };

            patch.apply(&mut target);

            assert_eq!(target.subject, "Changed");
            assert_eq!(target.body, "Body");
            assert!(!target.is_read);
        }

        #[test]
        fn merges_extra_keys() {
            let mut target = email(1);
            target
                .extra
                .insert("thread".into(), serde_json::json!("t-9"));

            let mut patch = EmailPatch::default();
            patch
                .extra
                .insert("labels".into(), serde_json::json!(["work"]));

            patch.apply(&mut target);

            assert_eq!(target.extra["thread"], serde_json::json!("t-9"));
            assert_eq!(target.extra["labels"], serde_json::json!(["work"]));
        }

        #[test]
        fn read_patch_sets_only_the_read_flag() {
            let mut target = email(1);
            EmailPatch::read().apply(&mut target);

            assert!(target.is_read);
            assert!(!target.is_flagged);
            assert_eq!(target.subject, "Subject");
        }
    }

    mod serde_tests {
        use super::*;

        #[test]
        fn unknown_fields_round_trip_through_extra() {
            let json = serde_json::json!({
                "id": 7,
                "from_name": "Sender",
                "from_email": "sender@example.com",
                "subject": "Subject",
                "body": "Body",
                "received_at": "2026-07-30T09:15:00Z",
                "thread_id": "t-42",
                "labels": ["inbox", "work"],
            });

            let parsed: Email = serde_json::from_value(json).unwrap();
            assert_eq!(parsed.id, EmailId(7));
            assert_eq!(parsed.extra["thread_id"], serde_json::json!("t-42"));

            let back = serde_json::to_value(&parsed).unwrap();
            assert_eq!(back["labels"], serde_json::json!(["inbox", "work"]));
        }
    }

    mod sample_tests {
        use super::*;

        #[test]
        fn sample_inbox_has_unique_ids() {
            let inbox = Email::sample_inbox();
            let mut ids: Vec<EmailId> = inbox.iter().map(|e| e.id).collect();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), inbox.len());
        }
    }
}

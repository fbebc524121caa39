//! Application state snapshot.

use crate::email::{Email, EmailId};

/// The state the mailbox view renders from.
///
/// Created once per session, mutated exclusively through
/// [`transition`](crate::store::transition), and dropped with the session.
/// Not persisted anywhere.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    /// Emails in display order. Order is meaningful and preserved across
    /// updates; identifiers are unique at all times.
    pub emails: Vec<Email>,
    /// Value copy of the currently open email, or none.
    ///
    /// A selection made from the list refers to an id present in `emails`
    /// at selection time, but the store does not re-synchronize it if the
    /// backing entry is later removed.
    pub selected_email: Option<Email>,
    /// True while the list collection is being (re)fetched.
    pub loading_emails: bool,
    /// True while a single email's detail is being fetched.
    pub loading_email: bool,
    /// Session presence flag.
    pub is_logged_in: bool,
}

impl AppState {
    /// Creates an empty, signed-out state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a state pre-seeded with emails.
    #[must_use]
    pub fn with_emails(emails: Vec<Email>) -> Self {
        Self {
            emails,
            ..Self::default()
        }
    }

    /// Looks up an email in the list by id.
    #[must_use]
    pub fn email(&self, id: EmailId) -> Option<&Email> {
        self.emails.iter().find(|e| e.id == id)
    }

    /// Id of the selected email, if any.
    #[must_use]
    pub fn selected_id(&self) -> Option<EmailId> {
        self.selected_email.as_ref().map(|e| e.id)
    }
}

//! The state container: a pure transition function and the owning store
//! with its in-order dispatch queue.

use std::collections::VecDeque;

use crate::action::Action;
use crate::error::{Error, Result};
use crate::state::AppState;

/// Applies one action to a state snapshot, producing the next snapshot.
///
/// Pure: no I/O, no observable effect beyond the returned state. Absent-id
/// removals and updates are silent no-ops. [`Action::Unknown`] fails with
/// [`Error::UnknownAction`] and the caller's state is left exactly as it
/// was; a partially-applied state is never produced.
///
/// # Errors
///
/// Returns [`Error::UnknownAction`] for an unrecognized action.
pub fn transition(state: &AppState, action: &Action) -> Result<AppState> {
    let mut next = state.clone();

    match action {
        Action::SetLoggedIn(flag) => next.is_logged_in = *flag,
        Action::SetLoggedOut => next.is_logged_in = false,
        Action::SetLoadingEmails(flag) => next.loading_emails = *flag,
        Action::SetLoadingEmail(flag) => next.loading_email = *flag,
        Action::SetEmails(emails) => next.emails = emails.clone(),
        Action::ClearEmails => next.emails.clear(),
        Action::RemoveEmail(id) => next.emails.retain(|e| e.id != *id),
        Action::UpdateEmail { id, patch } => {
            if let Some(email) = next.emails.iter_mut().find(|e| e.id == *id) {
                patch.apply(email);
            }
        }
        Action::SetSelectedEmail(selection) => next.selected_email = selection.clone(),
        Action::Unknown => return Err(Error::UnknownAction),
    }

    Ok(next)
}

/// Owns the application state and serializes all mutation through a FIFO
/// dispatch queue.
///
/// Actions apply strictly in submission order and each transition is atomic
/// with respect to observers: [`Store::state`] only ever shows the snapshot
/// between transitions, never a half-applied one.
#[derive(Debug)]
pub struct Store {
    state: AppState,
    queue: VecDeque<Action>,
}

impl Store {
    /// Creates a store owning the given initial state.
    #[must_use]
    pub const fn new(initial: AppState) -> Self {
        Self {
            state: initial,
            queue: VecDeque::new(),
        }
    }

    /// Current state snapshot. Read-only; all writes go through
    /// [`Store::dispatch`].
    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// Queues one action and applies everything queued, in order.
    ///
    /// # Errors
    ///
    /// Returns the first transition failure. The failing action is not
    /// applied and anything still queued behind it is discarded; the state
    /// reflects exactly the actions applied before the failure.
    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        self.queue.push_back(action);
        self.drain()
    }

    /// Queues several actions and applies them in the order given.
    ///
    /// # Errors
    ///
    /// Same contract as [`Store::dispatch`].
    pub fn dispatch_all<I>(&mut self, actions: I) -> Result<()>
    where
        I: IntoIterator<Item = Action>,
    {
        self.queue.extend(actions);
        self.drain()
    }

    /// Dispatches an action from its JSON wire form.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serde`] for malformed JSON and
    /// [`Error::UnknownAction`] for a well-formed action whose tag is not
    /// in the recognized set.
    pub fn dispatch_wire(&mut self, json: &str) -> Result<()> {
        let action: Action = serde_json::from_str(json)?;
        self.dispatch(action)
    }

    fn drain(&mut self) -> Result<()> {
        while let Some(action) = self.queue.pop_front() {
            tracing::debug!(action = action.name(), "applying action");
            match transition(&self.state, &action) {
                Ok(next) => self.state = next,
                Err(err) => {
                    self.queue.clear();
                    return Err(err);
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::email::{Email, EmailId, EmailPatch};
    use chrono::Utc;

    fn email(id: u64) -> Email {
        Email {
            id: EmailId(id),
            from_name: format!("Sender {id}"),
            from_email: format!("sender{id}@example.com"),
            subject: format!("Subject {id}"),
            body: "Body".into(),
            received_at: Utc::now(),
            is_read: false,
            is_flagged: false,
            extra: serde_json::Map::new(),
        }
    }

    fn seeded(ids: &[u64]) -> Store {
        Store::new(AppState::with_emails(ids.iter().copied().map(email).collect()))
    }

    mod transition_tests {
        use super::*;

        #[test]
        fn set_emails_replaces_wholesale_and_keeps_selection() {
            let mut store = seeded(&[1, 2]);
            store
                .dispatch(Action::SetSelectedEmail(Some(email(1))))
                .unwrap();

            store
                .dispatch(Action::SetEmails(vec![email(7), email(8)]))
                .unwrap();

            let ids: Vec<EmailId> = store.state().emails.iter().map(|e| e.id).collect();
            assert_eq!(ids, vec![EmailId(7), EmailId(8)]);
            assert_eq!(store.state().selected_id(), Some(EmailId(1)));
        }

        #[test]
        fn clear_emails_empties_the_list() {
            let mut store = seeded(&[1, 2, 3]);
            store.dispatch(Action::ClearEmails).unwrap();
            assert!(store.state().emails.is_empty());
        }

        #[test]
        fn remove_email_is_idempotent() {
            let mut store = seeded(&[1, 2]);

            store.dispatch(Action::RemoveEmail(EmailId(1))).unwrap();
            let after_first = store.state().clone();

            store.dispatch(Action::RemoveEmail(EmailId(1))).unwrap();
            assert_eq!(store.state(), &after_first);
        }

        #[test]
        fn remove_absent_id_is_a_noop() {
            let mut store = seeded(&[1, 2]);
            let before = store.state().clone();

            store.dispatch(Action::RemoveEmail(EmailId(99))).unwrap();
            assert_eq!(store.state(), &before);
        }

        #[test]
        fn update_touches_only_the_named_fields_of_the_match() {
            let mut store = seeded(&[1, 2]);
            let untouched = store.state().email(EmailId(2)).unwrap().clone();

            store
                .dispatch(Action::UpdateEmail {
                    id: EmailId(1),
                    patch: EmailPatch {
                        subject: Some("X".into()),
                        ..EmailPatch::default()
                    },
                })
                .unwrap();

            let updated = store.state().email(EmailId(1)).unwrap();
            assert_eq!(updated.subject, "X");
            assert_eq!(updated.body, "Body");
            assert_eq!(updated.from_email, "sender1@example.com");
            assert_eq!(store.state().email(EmailId(2)).unwrap(), &untouched);
        }

        #[test]
        fn update_absent_id_is_a_noop() {
            let mut store = seeded(&[1]);
            let before = store.state().clone();

            store
                .dispatch(Action::UpdateEmail {
                    id: EmailId(42),
                    patch: EmailPatch::read(),
                })
                .unwrap();
            assert_eq!(store.state(), &before);
        }

        #[test]
        fn logged_out_keeps_emails_and_selection() {
            let mut store = seeded(&[1, 2]);
            store
                .dispatch_all([
                    Action::SetLoggedIn(true),
                    Action::SetSelectedEmail(Some(email(2))),
                ])
                .unwrap();

            store.dispatch(Action::SetLoggedOut).unwrap();

            assert!(!store.state().is_logged_in);
            assert_eq!(store.state().emails.len(), 2);
            assert_eq!(store.state().selected_id(), Some(EmailId(2)));
        }
    }

    mod error_tests {
        use super::*;

        #[test]
        fn unknown_action_fails_without_observable_mutation() {
            let mut store = seeded(&[1]);
            let before = store.state().clone();

            let err = store.dispatch(Action::Unknown).unwrap_err();
            assert!(matches!(err, Error::UnknownAction));
            assert_eq!(store.state(), &before);
        }

        #[test]
        fn unrecognized_wire_tag_is_rejected() {
            let mut store = seeded(&[1]);
            let before = store.state().clone();

            let err = store
                .dispatch_wire(r#"{"type":"archiveAll","payload":null}"#)
                .unwrap_err();
            assert!(matches!(err, Error::UnknownAction));
            assert_eq!(store.state(), &before);
        }

        #[test]
        fn recognized_wire_action_applies() {
            let mut store = seeded(&[1, 2]);
            store
                .dispatch_wire(r#"{"type":"removeEmail","payload":2}"#)
                .unwrap();
            assert!(store.state().email(EmailId(2)).is_none());
        }

        #[test]
        fn failed_drain_discards_the_queued_tail() {
            let mut store = Store::new(AppState::new());

            let err = store
                .dispatch_all([
                    Action::SetLoadingEmails(true),
                    Action::Unknown,
                    Action::SetLoadingEmails(false),
                ])
                .unwrap_err();
            assert!(matches!(err, Error::UnknownAction));

            // Everything before the failure applied; the tail did not and
            // does not linger for later dispatches.
            assert!(store.state().loading_emails);
            store.dispatch(Action::SetLoggedIn(true)).unwrap();
            assert!(store.state().loading_emails);
        }
    }

    mod scenario_tests {
        use super::*;

        #[test]
        fn list_fetch_lifecycle() {
            let mut store = Store::new(AppState::new());
            assert!(!store.state().loading_emails);

            store.dispatch(Action::SetLoadingEmails(true)).unwrap();
            assert!(store.state().loading_emails);

            store
                .dispatch_all([
                    Action::SetEmails(vec![email(1)]),
                    Action::SetLoadingEmails(false),
                ])
                .unwrap();

            assert_eq!(store.state().emails.len(), 1);
            assert_eq!(store.state().emails[0].id, EmailId(1));
            assert!(!store.state().loading_emails);
        }

        #[test]
        fn selection_stays_after_its_entry_is_removed() {
            let mut store = seeded(&[1, 2]);
            store
                .dispatch(Action::SetSelectedEmail(Some(email(1))))
                .unwrap();

            store.dispatch(Action::RemoveEmail(EmailId(1))).unwrap();

            let ids: Vec<EmailId> = store.state().emails.iter().map(|e| e.id).collect();
            assert_eq!(ids, vec![EmailId(2)]);
            // Intentional stale-reference behavior: the open email survives
            // removal of its list entry.
            assert_eq!(store.state().selected_id(), Some(EmailId(1)));
        }
    }
}

//! Selection/loading sequencing layered over the store.
//!
//! These helpers encode the dispatch contract the surrounding application
//! must honor around fetches:
//!
//! - set the matching loading flag before issuing a fetch;
//! - on completion (success or failure) clear it exactly once, then apply
//!   the payload on success;
//! - a cancelled completion dispatches nothing at all.
//!
//! Sign-out clears only the session flag. The list and selection are
//! intentionally kept; callers wanting a full reset dispatch
//! [`Action::ClearEmails`] / [`Action::SetSelectedEmail`] themselves.

use crate::action::Action;
use crate::email::Email;
use crate::error::Result;
use crate::fetch::CancelToken;
use crate::store::Store;

/// Marks the list fetch as in flight. Call before issuing it.
///
/// # Errors
///
/// Propagates transition failures from [`Store::dispatch`].
pub fn begin_list_fetch(store: &mut Store) -> Result<()> {
    store.dispatch(Action::SetLoadingEmails(true))
}

/// Applies a list-fetch completion.
///
/// Clears the loading flag exactly once for either outcome and stores the
/// fetched list on success. If the token was cancelled, nothing is
/// dispatched. Returns the failure message, if any, for the caller to
/// surface.
///
/// # Errors
///
/// Propagates transition failures from [`Store::dispatch_all`].
pub fn finish_list_fetch(
    store: &mut Store,
    cancel: &CancelToken,
    outcome: std::result::Result<Vec<Email>, String>,
) -> Result<Option<String>> {
    if cancel.is_cancelled() {
        tracing::debug!("list fetch completion suppressed by cancellation");
        return Ok(None);
    }

    match outcome {
        Ok(emails) => {
            store.dispatch_all([Action::SetLoadingEmails(false), Action::SetEmails(emails)])?;
            Ok(None)
        }
        Err(message) => {
            tracing::warn!(%message, "list fetch failed");
            store.dispatch(Action::SetLoadingEmails(false))?;
            Ok(Some(message))
        }
    }
}

/// Marks the single-email detail fetch as in flight. Call before issuing it.
///
/// # Errors
///
/// Propagates transition failures from [`Store::dispatch`].
pub fn begin_detail_fetch(store: &mut Store) -> Result<()> {
    store.dispatch(Action::SetLoadingEmail(true))
}

/// Applies a detail-fetch completion; same contract as
/// [`finish_list_fetch`], storing the fetched email as the selection on
/// success.
///
/// # Errors
///
/// Propagates transition failures from [`Store::dispatch_all`].
pub fn finish_detail_fetch(
    store: &mut Store,
    cancel: &CancelToken,
    outcome: std::result::Result<Email, String>,
) -> Result<Option<String>> {
    if cancel.is_cancelled() {
        tracing::debug!("detail fetch completion suppressed by cancellation");
        return Ok(None);
    }

    match outcome {
        Ok(email) => {
            store.dispatch_all([
                Action::SetLoadingEmail(false),
                Action::SetSelectedEmail(Some(email)),
            ])?;
            Ok(None)
        }
        Err(message) => {
            tracing::warn!(%message, "detail fetch failed");
            store.dispatch(Action::SetLoadingEmail(false))?;
            Ok(Some(message))
        }
    }
}

/// Signs the session out. Emails and selection are kept as-is.
///
/// # Errors
///
/// Propagates transition failures from [`Store::dispatch`].
pub fn sign_out(store: &mut Store) -> Result<()> {
    store.dispatch(Action::SetLoggedOut)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::email::EmailId;
    use crate::state::AppState;
    use chrono::Utc;

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

    #[test]
    fn list_fetch_success_clears_flag_then_stores_emails() {
        let mut store = Store::new(AppState::new());
        let token = CancelToken::new();

        begin_list_fetch(&mut store).unwrap();
        assert!(store.state().loading_emails);

        let surfaced = finish_list_fetch(&mut store, &token, Ok(vec![email(1)])).unwrap();
        assert_eq!(surfaced, None);
        assert!(!store.state().loading_emails);
        assert_eq!(store.state().emails.len(), 1);
    }

    #[test]
    fn list_fetch_failure_clears_flag_and_surfaces_message() {
        let mut store = Store::new(AppState::new());
        let token = CancelToken::new();

        begin_list_fetch(&mut store).unwrap();
        let surfaced =
            finish_list_fetch(&mut store, &token, Err("connection reset".into())).unwrap();

        assert_eq!(surfaced.as_deref(), Some("connection reset"));
        assert!(!store.state().loading_emails);
        assert!(store.state().emails.is_empty());
    }

    #[test]
    fn cancelled_completion_dispatches_nothing() {
        let mut store = Store::new(AppState::new());
        let token = CancelToken::new();

        begin_list_fetch(&mut store).unwrap();
        token.cancel();

        let surfaced = finish_list_fetch(&mut store, &token, Ok(vec![email(1)])).unwrap();
        assert_eq!(surfaced, None);
        // Nothing dispatched: the flag was not reset and the payload was
        // dropped.
        assert!(store.state().loading_emails);
        assert!(store.state().emails.is_empty());
    }

    #[test]
    fn detail_fetch_success_selects_the_email() {
        let mut store = Store::new(AppState::with_emails(vec![email(1)]));
        let token = CancelToken::new();

        begin_detail_fetch(&mut store).unwrap();
        assert!(store.state().loading_email);

        finish_detail_fetch(&mut store, &token, Ok(email(1))).unwrap();
        assert!(!store.state().loading_email);
        assert_eq!(store.state().selected_id(), Some(EmailId(1)));
    }

    #[test]
    fn detail_fetch_failure_keeps_previous_selection() {
        let mut store = Store::new(AppState::new());
        let token = CancelToken::new();
        store
            .dispatch(Action::SetSelectedEmail(Some(email(2))))
            .unwrap();

        begin_detail_fetch(&mut store).unwrap();
        let surfaced = finish_detail_fetch(&mut store, &token, Err("timeout".into())).unwrap();

        assert_eq!(surfaced.as_deref(), Some("timeout"));
        assert!(!store.state().loading_email);
        assert_eq!(store.state().selected_id(), Some(EmailId(2)));
    }

    #[test]
    fn sign_out_only_clears_the_session_flag() {
        let mut store = Store::new(AppState::with_emails(vec![email(1)]));
        store
            .dispatch_all([
                Action::SetLoggedIn(true),
                Action::SetSelectedEmail(Some(email(1))),
            ])
            .unwrap();

        sign_out(&mut store).unwrap();

        assert!(!store.state().is_logged_in);
        assert_eq!(store.state().emails.len(), 1);
        assert_eq!(store.state().selected_id(), Some(EmailId(1)));
    }
}

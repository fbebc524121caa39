//! Message types for application events.
//!
//! In the Elm architecture, Messages are events that trigger state changes.
//! Store-level changes are expressed as `mailpane_core` actions dispatched
//! from `update`; fetch completions carry the `CancelToken` of the request
//! that produced them so stale results can be suppressed.

use mailpane_core::{CancelToken, Email, EmailId};

use crate::model::AppSettings;

/// Application messages (events).
#[derive(Debug, Clone)]
pub enum Message {
    // Session
    /// Sign the session in and load the mailbox.
    SignIn,
    /// Sign the session out.
    SignOut,

    // List fetch
    /// Re-fetch the email list.
    RefreshEmails,
    /// Email list fetch completed.
    EmailsLoaded(CancelToken, Result<Vec<Email>, String>),

    // Detail fetch
    /// Open an email from the list.
    SelectEmail(EmailId),
    /// Single-email detail fetch completed.
    EmailLoaded(CancelToken, Result<Email, String>),
    /// Close the open email.
    ClearSelection,

    // List item interaction
    /// Pointer entered a list row.
    ItemEntered(EmailId),
    /// Pointer left a list row.
    ItemExited(EmailId),
    /// Toggle a row's body between clamped and expanded.
    ToggleBody(EmailId),
    /// Delete an email from its row actions.
    DeleteEmail(EmailId),
    /// Delete request completed.
    EmailDeleted(EmailId, Result<(), String>),
    /// Mark an email read from its row actions.
    MarkRead(EmailId),
    /// Mark-read request completed.
    EmailMarkedRead(EmailId, Result<(), String>),

    // Settings
    /// Toggle between light and dark theme.
    ToggleTheme,
    /// Settings loaded from disk.
    SettingsLoaded(Result<AppSettings, String>),
    /// Settings saved to disk.
    SettingsSaved(Result<(), String>),

    // Error banner
    /// Dismiss the error banner.
    DismissError,
}

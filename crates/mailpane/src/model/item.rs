//! Per-row presentation state for the email list.
//!
//! Each rendered row carries three independent flags; all eight
//! combinations are valid. The flags are ephemeral view state: they live
//! and die with the row and never enter the store.

/// Visual state of one email list row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ItemState {
    /// Pointer is over the row. Shows the action icons in place of the
    /// received timestamp.
    pub hovered: bool,
    /// Body renders in full instead of the two-line preview.
    pub body_expanded: bool,
    /// An item-scoped request (delete, mark read) is in flight. The busy
    /// indicator supersedes the action icons regardless of hover.
    pub busy: bool,
}

/// What the trailing slot of a row shows. Exactly one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemSlot {
    /// Received-timestamp label (idle, not hovered).
    Timestamp,
    /// Hover-revealed action icons.
    Actions,
    /// In-flight indicator for an item-scoped request.
    Busy,
}

impl ItemState {
    /// Fresh row state: not hovered, body clamped, idle.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hovered: false,
            body_expanded: false,
            busy: false,
        }
    }

    /// Pointer entered the row.
    pub const fn pointer_entered(&mut self) {
        self.hovered = true;
    }

    /// Pointer left the row.
    pub const fn pointer_left(&mut self) {
        self.hovered = false;
    }

    /// Toggles the body between clamped and expanded. Never auto-collapses.
    pub const fn toggle_body(&mut self) {
        self.body_expanded = !self.body_expanded;
    }

    /// An item-scoped request was issued.
    pub const fn begin_action(&mut self) {
        self.busy = true;
    }

    /// The item-scoped request finished, successfully or not.
    pub const fn finish_action(&mut self) {
        self.busy = false;
    }

    /// Resolves which content the trailing slot shows: busy supersedes the
    /// action icons, which supersede the timestamp.
    #[must_use]
    pub const fn slot(&self) -> ItemSlot {
        if self.busy {
            ItemSlot::Busy
        } else if self.hovered {
            ItemSlot::Actions
        } else {
            ItemSlot::Timestamp
        }
    }
}

/// Character budget of the collapsed body preview; sized to roughly two
/// list-width lines.
const PREVIEW_BUDGET: usize = 140;

/// Clamps a body to its two-line preview form, with ellipsis when anything
/// was cut.
#[must_use]
pub fn preview(body: &str) -> String {
    let kept: Vec<&str> = body.lines().take(2).collect();
    let mut text = kept.join("\n");
    let mut truncated = body.lines().count() > 2;

    if text.chars().count() > PREVIEW_BUDGET {
        text = text.chars().take(PREVIEW_BUDGET).collect();
        truncated = true;
    }

    let mut text = text.trim_end().to_string();
    if truncated {
        text.push_str("...");
    }
    text
}

/// Whether a body has more content than its preview shows.
#[must_use]
pub fn is_clamped(body: &str) -> bool {
    body.lines().count() > 2 || body.chars().count() > PREVIEW_BUDGET
}

#[cfg(test)]
mod tests {
    use super::*;

    mod state_machine_tests {
        use super::*;

        #[test]
        fn fresh_item_is_all_false() {
            let item = ItemState::new();
            assert!(!item.hovered);
            assert!(!item.body_expanded);
            assert!(!item.busy);
            assert_eq!(item.slot(), ItemSlot::Timestamp);
        }

        #[test]
        fn pointer_enter_and_leave_drive_hover() {
            let mut item = ItemState::new();

            item.pointer_entered();
            assert!(item.hovered);
            assert_eq!(item.slot(), ItemSlot::Actions);

            item.pointer_left();
            assert!(!item.hovered);
            assert_eq!(item.slot(), ItemSlot::Timestamp);
        }

        #[test]
        fn busy_supersedes_hover() {
            let mut item = ItemState::new();
            item.pointer_entered();
            item.begin_action();

            assert!(item.busy);
            assert_eq!(item.slot(), ItemSlot::Busy);

            // Hover changes underneath do not unseat the indicator.
            item.pointer_left();
            assert_eq!(item.slot(), ItemSlot::Busy);

            item.finish_action();
            assert_eq!(item.slot(), ItemSlot::Timestamp);
        }

        #[test]
        fn begin_action_works_regardless_of_hover() {
            let mut item = ItemState::new();
            item.begin_action();
            assert!(item.busy);
            assert!(!item.hovered);
        }

        #[test]
        fn body_toggle_is_explicit_and_sticky() {
            let mut item = ItemState::new();

            item.toggle_body();
            assert!(item.body_expanded);

            // Hover and busy changes never collapse it.
            item.pointer_entered();
            item.begin_action();
            item.finish_action();
            item.pointer_left();
            assert!(item.body_expanded);

            item.toggle_body();
            assert!(!item.body_expanded);
        }
    }

    mod preview_tests {
        use super::*;

        #[test]
        fn short_body_is_unchanged() {
            assert_eq!(preview("Short note."), "Short note.");
            assert!(!is_clamped("Short note."));
        }

        #[test]
        fn two_lines_fit_without_ellipsis() {
            let body = "First line.\nSecond line.";
            assert_eq!(preview(body), body);
            assert!(!is_clamped(body));
        }

        #[test]
        fn third_line_is_cut_with_ellipsis() {
            let body = "First line.\nSecond line.\nThird line.";
            assert_eq!(preview(body), "First line.\nSecond line....");
            assert!(is_clamped(body));
        }

        #[test]
        fn long_single_line_is_cut_at_the_budget() {
            let body = "x".repeat(400);
            let clamped = preview(&body);

            assert!(clamped.ends_with("..."));
            assert_eq!(clamped.chars().count(), 140 + 3);
            assert!(is_clamped(&body));
        }
    }
}

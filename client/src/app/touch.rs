//! # Touch Wiring
//!
//! Routes raw pointer events to the two gesture machines and turns settled
//! gestures into screen behavior: a revealed action button performs its
//! operation, a released pull reloads the current page.

use super::ExpenseListApp;
use crate::effects::Effect;
use crate::gestures::RevealedAction;

impl ExpenseListApp {
    // --- per-row swipe -----------------------------------------------------

    pub fn on_row_touch_start(&mut self, row_id: &str, x: f32, y: f32) {
        self.swipe.touch_start(row_id, x, y);
    }

    pub fn on_row_touch_move(&mut self, row_id: &str, x: f32, y: f32) {
        self.swipe.touch_move(row_id, x, y);
    }

    pub fn on_row_touch_end(&mut self) {
        self.swipe.touch_end();
    }

    /// A tap landed on the action button of a fully open row. Performs the
    /// revealed operation and closes the swipe.
    pub fn tap_revealed_action(&mut self) -> Vec<Effect> {
        let Some((row_id, action)) = self
            .swipe
            .revealed_action()
            .map(|(id, action)| (id.to_string(), action))
        else {
            return Vec::new();
        };

        match action {
            RevealedAction::Edit => {
                self.swipe.close();
                vec![Effect::NavigateToEdit { expense_id: row_id }]
            }
            // delete_expense closes the swipe itself.
            RevealedAction::Delete => self.delete_expense(&row_id),
        }
    }

    /// Any collection-level tap closes whichever row is open.
    pub fn on_collection_tap(&mut self) {
        self.swipe.close();
    }

    // --- list-level pull ---------------------------------------------------

    pub fn on_list_touch_start(&mut self, y: f32, at_top: bool) {
        self.pull.touch_start(y, at_top);
    }

    pub fn on_list_touch_move(&mut self, y: f32) {
        self.pull
            .touch_move(y, self.swipe.horizontal_in_progress());
    }

    /// Finger lifted from the list. A pull released past the threshold
    /// reloads the current page; the indicator stays pinned until that load
    /// settles (see `apply_page`).
    pub fn on_list_touch_end(&mut self) -> Vec<Effect> {
        if self.pull.touch_end() {
            self.store.reload()
        } else {
            Vec::new()
        }
    }
}

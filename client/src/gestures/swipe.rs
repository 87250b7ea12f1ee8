//! # Swipe-Reveal Module
//!
//! Per-row horizontal swipe that reveals hidden action buttons: edit on the
//! left (finger moving right), delete on the right (finger moving left).
//!
//! ## State machine:
//! `Idle → DirectionPending → {Horizontal → Dragging → Settled} | Vertical`.
//! Direction is undetermined until movement leaves a small dead zone; once
//! locked it holds for the gesture's duration, and a vertical lock hands the
//! touch stream back to normal scrolling. At most one row is open at a time.

use log::debug;

/// Width of the revealed action area, in device-independent pixels.
pub const REVEAL_WIDTH: f32 = 80.0;

/// Movement below this locks no direction yet.
pub const DIRECTION_DEAD_ZONE: f32 = 10.0;

/// Fraction of the reveal width the release offset must exceed to snap open.
const OPEN_FRACTION: f32 = 0.4;

/// Axis a gesture locked onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SwipeDirection {
    Horizontal,
    Vertical,
}

/// Action button exposed by a fully open row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealedAction {
    /// Left-side action, revealed by swiping right
    Edit,
    /// Right-side action, revealed by swiping left
    Delete,
}

/// Swipe-reveal state for the whole list (one row at most is ever engaged).
#[derive(Debug, Default)]
pub struct SwipeState {
    /// Row currently dragged or snapped open
    row_id: Option<String>,
    /// Horizontal offset of that row, clamped to ±REVEAL_WIDTH
    offset: f32,
    /// Whether the finger is currently driving the offset
    dragging: bool,
    direction: Option<SwipeDirection>,
    start_x: f32,
    start_y: f32,
}

impl SwipeState {
    pub fn new() -> Self {
        Self::default()
    }

    /// A finger came down on `row_id`. Opening a new row closes a previously
    /// open one immediately.
    pub fn touch_start(&mut self, row_id: &str, x: f32, y: f32) {
        self.start_x = x;
        self.start_y = y;
        self.direction = None;

        if self.row_id.as_deref().is_some_and(|open| open != row_id) {
            self.close();
        }
    }

    /// The finger moved. Locks direction once outside the dead zone; while
    /// horizontal, the row mirrors the finger 1:1 up to the reveal width.
    pub fn touch_move(&mut self, row_id: &str, x: f32, y: f32) {
        let delta_x = x - self.start_x;
        let delta_y = y - self.start_y;

        if self.direction.is_none() {
            if delta_x.abs() > DIRECTION_DEAD_ZONE || delta_y.abs() > DIRECTION_DEAD_ZONE {
                self.direction = Some(if delta_x.abs() > delta_y.abs() {
                    SwipeDirection::Horizontal
                } else {
                    SwipeDirection::Vertical
                });
                debug!("👆 Swipe direction locked: {:?}", self.direction);
            }
            return;
        }

        if self.direction == Some(SwipeDirection::Vertical) {
            return;
        }

        self.dragging = true;
        self.row_id = Some(row_id.to_string());
        self.offset = delta_x.clamp(-REVEAL_WIDTH, REVEAL_WIDTH);
    }

    /// The finger lifted. Past 40% of the reveal width the row snaps fully
    /// open toward that side; otherwise it snaps shut.
    pub fn touch_end(&mut self) {
        self.direction = None;
        if !self.dragging {
            return;
        }
        self.dragging = false;

        let threshold = REVEAL_WIDTH * OPEN_FRACTION;
        if self.offset > threshold {
            self.offset = REVEAL_WIDTH;
        } else if self.offset < -threshold {
            self.offset = -REVEAL_WIDTH;
        } else {
            self.close();
        }
    }

    /// Snap everything shut (collection-level tap, action performed, new row
    /// engaged).
    pub fn close(&mut self) {
        self.row_id = None;
        self.offset = 0.0;
        self.dragging = false;
    }

    /// Row id and action of a fully open (settled, not mid-drag) row.
    pub fn revealed_action(&self) -> Option<(&str, RevealedAction)> {
        if self.dragging {
            return None;
        }
        let row = self.row_id.as_deref()?;
        if self.offset >= REVEAL_WIDTH {
            Some((row, RevealedAction::Edit))
        } else if self.offset <= -REVEAL_WIDTH {
            Some((row, RevealedAction::Delete))
        } else {
            None
        }
    }

    /// Horizontal offset the presentation layer applies to `row_id`.
    pub fn row_offset(&self, row_id: &str) -> f32 {
        if self.row_id.as_deref() == Some(row_id) {
            self.offset
        } else {
            0.0
        }
    }

    /// Whether a horizontal swipe currently owns the touch stream.
    pub fn horizontal_in_progress(&self) -> bool {
        self.direction == Some(SwipeDirection::Horizontal)
    }

    pub fn open_row(&self) -> Option<&str> {
        if self.dragging {
            None
        } else {
            self.row_id.as_deref()
        }
    }
}

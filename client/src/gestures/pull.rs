//! # Pull-To-Refresh Module
//!
//! List-level downward pull that reloads the current page.
//!
//! ## State machine:
//! `Idle → Pulling → {Armed → Refreshing → Idle} | Idle`. The pull only
//! counts when it starts at the top of scroll and no horizontal swipe owns
//! the touch stream. The indicator stays pinned until the triggered load
//! settles — success or failure — so it can neither vanish early nor hang
//! past the load's own failure path.

use log::info;

/// Pull distance required to arm the refresh.
pub const PULL_THRESHOLD: f32 = 70.0;

/// The indicator follows the finger at this fraction of the raw delta.
const PULL_DAMPING: f32 = 0.4;

/// How far past the threshold the indicator may stretch.
const MAX_OVERSHOOT: f32 = 20.0;

/// Indicator height while the refresh is running.
const PINNED_HEIGHT: f32 = 50.0;

/// Pull-to-refresh state for the expense list.
#[derive(Debug, Default)]
pub struct PullToRefresh {
    start_y: f32,
    /// Touch began at the top of scroll
    pulling: bool,
    distance: f32,
    refreshing: bool,
}

impl PullToRefresh {
    pub fn new() -> Self {
        Self::default()
    }

    /// A finger came down on the list. Only a touch that starts at the top
    /// of scroll can become a pull.
    pub fn touch_start(&mut self, y: f32, at_top: bool) {
        if self.refreshing {
            return;
        }
        self.start_y = y;
        self.pulling = at_top;
    }

    /// The finger moved. The indicator follows at a damped rate, capped just
    /// past the threshold. Ignored while a horizontal swipe owns the stream.
    pub fn touch_move(&mut self, y: f32, horizontal_swipe_in_progress: bool) {
        if self.refreshing || !self.pulling || horizontal_swipe_in_progress {
            return;
        }
        let delta = y - self.start_y;
        if delta > 0.0 {
            self.distance = (delta * PULL_DAMPING).min(PULL_THRESHOLD + MAX_OVERSHOOT);
        }
    }

    /// The finger lifted. Returns true when the refresh fires; the caller
    /// must start the reload and later call [`finish`](Self::finish) once it
    /// settles.
    pub fn touch_end(&mut self) -> bool {
        if self.refreshing {
            return false;
        }
        self.pulling = false;

        if self.distance >= PULL_THRESHOLD {
            info!("🔄 Pull released past threshold, refreshing");
            self.refreshing = true;
            self.distance = PINNED_HEIGHT;
            true
        } else {
            self.distance = 0.0;
            false
        }
    }

    /// The triggered load settled (success or failure).
    pub fn finish(&mut self) {
        self.refreshing = false;
        self.distance = 0.0;
    }

    /// Released here, the pull would fire.
    pub fn is_armed(&self) -> bool {
        !self.refreshing && self.distance >= PULL_THRESHOLD
    }

    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    /// Indicator height for the presentation layer.
    pub fn distance(&self) -> f32 {
        self.distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_pull_snaps_back() {
        let mut pull = PullToRefresh::new();
        pull.touch_start(0.0, true);
        pull.touch_move(100.0, false); // damped to 40
        assert!(!pull.is_armed());
        assert!(!pull.touch_end());
        assert_eq!(pull.distance(), 0.0);
    }

    #[test]
    fn long_pull_arms_and_fires() {
        let mut pull = PullToRefresh::new();
        pull.touch_start(0.0, true);
        pull.touch_move(200.0, false); // damped to 80
        assert!(pull.is_armed());
        assert!(pull.touch_end());
        assert!(pull.is_refreshing());
        assert_eq!(pull.distance(), 50.0);
    }

    #[test]
    fn distance_is_damped_and_capped() {
        let mut pull = PullToRefresh::new();
        pull.touch_start(0.0, true);
        pull.touch_move(150.0, false);
        assert_eq!(pull.distance(), 60.0);
        pull.touch_move(1000.0, false);
        assert_eq!(pull.distance(), PULL_THRESHOLD + 20.0);
    }

    #[test]
    fn pull_away_from_top_never_arms() {
        let mut pull = PullToRefresh::new();
        pull.touch_start(0.0, false);
        pull.touch_move(400.0, false);
        assert_eq!(pull.distance(), 0.0);
        assert!(!pull.touch_end());
    }

    #[test]
    fn horizontal_swipe_suppresses_the_pull() {
        let mut pull = PullToRefresh::new();
        pull.touch_start(0.0, true);
        pull.touch_move(400.0, true);
        assert_eq!(pull.distance(), 0.0);
    }

    #[test]
    fn indicator_stays_pinned_until_finish() {
        let mut pull = PullToRefresh::new();
        pull.touch_start(0.0, true);
        pull.touch_move(300.0, false);
        assert!(pull.touch_end());

        // Touches while refreshing are ignored.
        pull.touch_start(0.0, true);
        pull.touch_move(300.0, false);
        assert!(!pull.touch_end());
        assert!(pull.is_refreshing());

        pull.finish();
        assert!(!pull.is_refreshing());
        assert_eq!(pull.distance(), 0.0);
    }
}

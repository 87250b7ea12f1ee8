//! Gesture state machines driven by raw pointer deltas.
//!
//! Two independent machines share the touch stream: per-row swipe-reveal and
//! list-level pull-to-refresh. They must not fight over the same gesture, so
//! the pull machine stands down while a horizontal swipe is in progress.
//! Both are self-cancelling on touch-end; neither needs a cancellation token.

pub mod pull;
pub mod swipe;

pub use pull::PullToRefresh;
pub use swipe::{RevealedAction, SwipeState};

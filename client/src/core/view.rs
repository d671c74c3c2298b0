//! View selector state machine
//!
//! Transitions are unconditional. The transition function returns the effects
//! the caller must perform instead of performing them itself.

use crate::types::ActiveView;

/// Side effect requested by a view transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEffect {
    RefreshStatistics,
}

/// Result of activating a view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub from: ActiveView,
    pub to: ActiveView,
    pub effects: Vec<ViewEffect>,
}

/// Tracks which workflow view is active
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewSelector {
    active: ActiveView,
}

impl ViewSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> ActiveView {
        self.active
    }

    /// Compute the transition to `target` without changing state
    pub fn transition(&self, target: ActiveView) -> Transition {
        // Every activation of the statistics view refreshes, even a repeated one
        let effects = match target {
            ActiveView::Statistics => vec![ViewEffect::RefreshStatistics],
            ActiveView::Upload | ActiveView::Eligibility => Vec::new(),
        };

        Transition {
            from: self.active,
            to: target,
            effects,
        }
    }

    /// Move to `target` and return the effects to perform
    pub fn apply(&mut self, target: ActiveView) -> Transition {
        let transition = self.transition(target);
        self.active = transition.to;
        transition
    }
}

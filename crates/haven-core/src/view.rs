//! Screen routing state.
//!
//! Holds which screen is active and lets features (smart actions, upsell
//! prompts) request navigation without knowing how screens are drawn.

use serde::{Deserialize, Serialize};
use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LegalDocument {
    Privacy,
    Terms,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppView {
    Chat,
    Mood,
    Tools,
    Premium,
    Settings,
    Legal(LegalDocument),
}

impl std::fmt::Display for AppView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppView::Chat => write!(f, "chat"),
            AppView::Mood => write!(f, "mood"),
            AppView::Tools => write!(f, "tools"),
            AppView::Premium => write!(f, "premium"),
            AppView::Settings => write!(f, "settings"),
            AppView::Legal(doc) => write!(f, "legal ({doc})"),
        }
    }
}

/// Current view plus a back stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRouter {
    current: AppView,
    history: Vec<AppView>,
}

impl Default for ViewRouter {
    fn default() -> Self {
        Self {
            current: AppView::Chat,
            history: Vec::new(),
        }
    }
}

impl ViewRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> AppView {
        self.current
    }

    /// Switches to `view`. Navigating to the current view is a no-op.
    pub fn navigate(&mut self, view: AppView) {
        if view == self.current {
            return;
        }
        self.history.push(self.current);
        self.current = view;
    }

    /// Returns to the previous view, or stays put when there is none.
    pub fn back(&mut self) -> AppView {
        if let Some(previous) = self.history.pop() {
            self.current = previous;
        }
        self.current
    }
}

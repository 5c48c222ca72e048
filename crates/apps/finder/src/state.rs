//! Finder view state: active tab, sidebar visibility, edit mode, and the contact draft.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::contact::ContactDraft;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
/// Sections reachable from the Finder sidebar.
pub enum FinderTab {
    /// Profile summary.
    #[default]
    Overview,
    /// Employment history.
    Experience,
    /// Project cards.
    Projects,
    /// Skill categories.
    Skills,
    /// Education and certifications.
    Education,
    /// Contact form.
    Contact,
    /// Decorative recent files.
    Recents,
}

impl FinderTab {
    /// Tabs listed under "Favorites", in sidebar order.
    pub const FAVORITES: [FinderTab; 6] = [
        Self::Overview,
        Self::Experience,
        Self::Projects,
        Self::Skills,
        Self::Education,
        Self::Contact,
    ];

    /// Every tab.
    pub const ALL: [FinderTab; 7] = [
        Self::Overview,
        Self::Experience,
        Self::Projects,
        Self::Skills,
        Self::Education,
        Self::Contact,
        Self::Recents,
    ];

    /// Sidebar label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Overview => "About Me",
            Self::Experience => "Experience",
            Self::Projects => "Projects",
            Self::Skills => "Skills",
            Self::Education => "Education",
            Self::Contact => "Contact Me",
            Self::Recents => "Recent Files",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Local state owned by one Finder window.
pub struct FinderViewState {
    active_tab: FinderTab,
    sidebar_open: bool,
    edit_mode: bool,
    /// Contact form fields.
    pub contact: ContactDraft,
}

impl FinderViewState {
    /// Builds the initial state, honoring an optional `{"tab": "..."}` launch param.
    pub fn from_launch_params(params: &Value) -> Self {
        let active_tab = params
            .get("tab")
            .cloned()
            .and_then(|tab| serde_json::from_value::<FinderTab>(tab).ok())
            .unwrap_or_default();
        Self {
            active_tab,
            ..Self::default()
        }
    }

    /// Currently displayed tab.
    pub fn active_tab(&self) -> FinderTab {
        self.active_tab
    }

    /// Whether the narrow-viewport sidebar overlay is shown.
    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    /// Whether the cosmetic edit mode is on.
    pub fn edit_mode(&self) -> bool {
        self.edit_mode
    }

    /// Switches to `tab` and dismisses the sidebar overlay.
    pub fn select_tab(&mut self, tab: FinderTab) {
        self.active_tab = tab;
        self.sidebar_open = false;
    }

    /// Shows the sidebar overlay.
    pub fn open_sidebar(&mut self) {
        self.sidebar_open = true;
    }

    /// Hides the sidebar overlay.
    pub fn close_sidebar(&mut self) {
        self.sidebar_open = false;
    }

    /// Flips edit mode. Content is never mutated.
    pub fn toggle_edit_mode(&mut self) {
        self.edit_mode = !self.edit_mode;
    }
}

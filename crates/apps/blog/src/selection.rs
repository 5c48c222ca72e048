//! List/detail selection for the blog reader.

use portfolio_content::{BlogPost, Portfolio};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Which post, if any, is open in the detail pane.
pub struct BlogSelection {
    selected: Option<u32>,
}

impl BlogSelection {
    /// Selected post id. May name a post that does not exist.
    pub fn selected(self) -> Option<u32> {
        self.selected
    }

    /// Opens the post with `id`.
    pub fn select(&mut self, id: u32) {
        self.selected = Some(id);
    }

    /// Returns to the list.
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Whether the list row for `id` should be highlighted.
    pub fn is_selected(self, id: u32) -> bool {
        self.selected == Some(id)
    }

    /// Resolves the selection. Unknown ids resolve to `None` and render the placeholder.
    pub fn active_post(self, content: &Portfolio) -> Option<&BlogPost> {
        self.selected.and_then(|id| content.post(id))
    }
}

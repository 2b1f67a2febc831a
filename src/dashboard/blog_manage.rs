use crate::models::{BlogEntry, BlogId};

use super::confirm::Confirmation;

/// State of the "Blog Manage" panel: the in-memory blog list and the
/// pending delete target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogManager {
    blogs: Vec<BlogEntry>,
    pending: Confirmation<BlogId>,
}

impl BlogManager {
    pub fn new(blogs: Vec<BlogEntry>) -> Self {
        Self {
            blogs,
            pending: Confirmation::Idle,
        }
    }

    pub fn blogs(&self) -> &[BlogEntry] {
        &self.blogs
    }

    pub fn pending_delete(&self) -> Option<BlogId> {
        self.pending.pending().copied()
    }

    pub fn request_delete(&mut self, id: BlogId) {
        self.pending.request(id);
    }

    pub fn cancel_delete(&mut self) {
        self.pending.cancel();
    }

    /// Removes the pending entry, if any, and clears the pending target
    /// either way.
    pub fn confirm_delete(&mut self) -> Option<BlogEntry> {
        let id = self.pending.take()?;
        let index = self.blogs.iter().position(|b| b.id == id)?;
        Some(self.blogs.remove(index))
    }
}

/// Controlled value of the blog editor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogDraft {
    pub title: String,
    pub content: String,
}

impl BlogDraft {
    pub fn update(&mut self, title: Option<String>, content: Option<String>) {
        if let Some(title) = title {
            self.title = title;
        }
        if let Some(content) = content {
            self.content = content;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.trim().is_empty() && self.content.trim().is_empty()
    }
}

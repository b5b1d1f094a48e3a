#[cfg(test)]
#[path = "notices_test.rs"]
mod notices_test;

use crate::net::types::{Notice, NoticeDraft};

/// View state for the notices board. The one form serves both create
/// and edit; `editing_id` selects which branch submit takes.
#[derive(Clone, Debug, Default)]
pub struct NoticeBoardState {
    pub notices: Vec<Notice>,
    pub loading: bool,
    pub editing_id: Option<String>,
    pub title: String,
    pub description: String,
}

impl NoticeBoardState {
    pub fn replace(&mut self, notices: Vec<Notice>) {
        self.notices = notices;
    }

    /// Populate the form from a notice currently in the list. Returns
    /// false for an unknown id.
    pub fn begin_edit(&mut self, id: &str) -> bool {
        let Some(notice) = self.notices.iter().find(|n| n.id == id) else {
            return false;
        };
        self.title.clone_from(&notice.title);
        self.description.clone_from(&notice.description);
        self.editing_id = Some(id.to_owned());
        true
    }

    /// Leave edit mode and empty the form. No network involved.
    pub fn cancel_edit(&mut self) {
        self.editing_id = None;
        self.title.clear();
        self.description.clear();
    }

    /// Snapshot the form as a request body. No validation: empty
    /// fields are submitted as-is.
    pub fn draft(&self) -> NoticeDraft {
        NoticeDraft {
            title: self.title.clone(),
            description: self.description.clone(),
        }
    }

    /// True when submit should take the update branch rather than
    /// create.
    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }
}

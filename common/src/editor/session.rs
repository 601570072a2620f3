//! Save lifecycle of one document being edited.
//!
//! ```text
//! Idle --edit--> Editing --begin_save--> Saving --ok--> Idle
//!                                          \--err--> Failed --edit--> Editing
//! ```
//!
//! Saving only ever starts from an explicit user request. While a save is
//! outstanding further requests are refused, so one click produces exactly
//! one POST. Dirty tracking compares an MD5 digest of the draft against the
//! digest of the last persisted content.

/// Where the session is in its save lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SavePhase {
    Idle,
    Editing,
    Saving,
    /// Last save failed; the draft is kept untouched.
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSession {
    draft: String,
    persisted_md5: String,
    /// Content of the outstanding save, if any.
    in_flight: Option<String>,
    phase: SavePhase,
}

impl Default for DocumentSession {
    fn default() -> Self {
        Self::loaded(String::new())
    }
}

impl DocumentSession {
    /// A session whose draft equals the persisted `content`.
    pub fn loaded(content: String) -> Self {
        Self {
            persisted_md5: compute_md5(&content),
            draft: content,
            in_flight: None,
            phase: SavePhase::Idle,
        }
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn phase(&self) -> &SavePhase {
        &self.phase
    }

    pub fn is_saving(&self) -> bool {
        self.phase == SavePhase::Saving
    }

    pub fn is_dirty(&self) -> bool {
        compute_md5(&self.draft) != self.persisted_md5
    }

    /// Replaces the draft wholesale. Returns `true` when the content changed.
    pub fn edit(&mut self, html: String) -> bool {
        if self.draft == html {
            return false;
        }
        self.draft = html;
        if self.phase != SavePhase::Saving {
            self.phase = SavePhase::Editing;
        }
        true
    }

    /// Starts a save and returns the content to send, or `None` when a save
    /// is already outstanding.
    pub fn begin_save(&mut self) -> Option<String> {
        if self.is_saving() {
            return None;
        }
        self.phase = SavePhase::Saving;
        self.in_flight = Some(self.draft.clone());
        self.in_flight.clone()
    }

    pub fn save_succeeded(&mut self) {
        if let Some(saved) = self.in_flight.take() {
            self.persisted_md5 = compute_md5(&saved);
        }
        self.phase = if self.is_dirty() {
            SavePhase::Editing
        } else {
            SavePhase::Idle
        };
    }

    pub fn save_failed(&mut self, message: impl Into<String>) {
        self.in_flight = None;
        self.phase = SavePhase::Failed(message.into());
    }
}

/// Hex MD5 digest of `input`.
pub fn compute_md5(input: &str) -> String {
    format!("{:x}", md5::compute(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editing_marks_the_session_dirty() {
        let mut session = DocumentSession::loaded("<p>v1</p>".into());
        assert!(!session.is_dirty());
        assert!(session.edit("<p>v2</p>".into()));
        assert_eq!(session.phase(), &SavePhase::Editing);
        assert!(session.is_dirty());
        assert!(!session.edit("<p>v2</p>".into()));
    }

    #[test]
    fn save_is_single_flight() {
        let mut session = DocumentSession::loaded(String::new());
        session.edit("<p><strong>x</strong></p>".into());
        assert_eq!(
            session.begin_save().as_deref(),
            Some("<p><strong>x</strong></p>")
        );
        assert_eq!(session.begin_save(), None);
        session.save_succeeded();
        assert_eq!(session.phase(), &SavePhase::Idle);
        assert!(!session.is_dirty());
    }

    #[test]
    fn edits_during_save_stay_dirty() {
        let mut session = DocumentSession::loaded(String::new());
        session.edit("<p>a</p>".into());
        session.begin_save();
        session.edit("<p>ab</p>".into());
        assert!(session.is_saving());
        session.save_succeeded();
        assert_eq!(session.phase(), &SavePhase::Editing);
        assert!(session.is_dirty());
    }

    #[test]
    fn failure_keeps_draft_and_allows_retry() {
        let mut session = DocumentSession::loaded("<p>old</p>".into());
        session.edit("<p>new</p>".into());
        session.begin_save();
        session.save_failed("Server unavailable");
        assert_eq!(
            session.phase(),
            &SavePhase::Failed("Server unavailable".into())
        );
        assert_eq!(session.draft(), "<p>new</p>");
        assert!(session.is_dirty());
        assert!(session.begin_save().is_some());
    }

    #[test]
    fn digest_is_hex_md5() {
        assert_eq!(compute_md5(""), "d41d8cd98f00b204e9800998ecf8427e");
    }
}

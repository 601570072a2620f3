use std::collections::HashSet;

use crate::model::RecordId;

/// Mutating action that can be pending on a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowAction {
    Delete,
    Status,
}

/// Per-row in-flight flags.
///
/// Only guards against submitting the same action twice for the same row;
/// actions on different rows run independently.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InFlight {
    pending: HashSet<(RecordId, RowAction)>,
}

impl InFlight {
    /// Marks `action` as pending on `id`. Returns `false` when it already was,
    /// in which case the caller must not submit again.
    pub fn begin(&mut self, id: &RecordId, action: RowAction) -> bool {
        self.pending.insert((id.clone(), action))
    }

    pub fn finish(&mut self, id: &RecordId, action: RowAction) -> bool {
        self.pending.remove(&(id.clone(), action))
    }

    pub fn is_pending(&self, id: &RecordId, action: RowAction) -> bool {
        self.pending.contains(&(id.clone(), action))
    }

    pub fn is_row_busy(&self, id: &RecordId) -> bool {
        self.pending.iter().any(|(pending, _)| pending == id)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

/// Runs a release closure exactly once when dropped.
///
/// Held across an async mutation so the in-flight flag is cleared on every
/// exit path, including early returns.
pub struct ReleaseGuard<F: FnOnce()> {
    release: Option<F>,
}

impl<F: FnOnce()> ReleaseGuard<F> {
    pub fn new(release: F) -> Self {
        Self {
            release: Some(release),
        }
    }
}

impl<F: FnOnce()> Drop for ReleaseGuard<F> {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn second_begin_on_same_row_is_rejected() {
        let mut in_flight = InFlight::default();
        let id = RecordId::from("1");
        assert!(in_flight.begin(&id, RowAction::Delete));
        assert!(!in_flight.begin(&id, RowAction::Delete));
        assert!(in_flight.begin(&id, RowAction::Status));
        assert!(in_flight.begin(&RecordId::from("2"), RowAction::Delete));
    }

    #[test]
    fn finish_frees_the_row() {
        let mut in_flight = InFlight::default();
        let id = RecordId::from("1");
        in_flight.begin(&id, RowAction::Status);
        assert!(in_flight.is_row_busy(&id));
        assert!(in_flight.finish(&id, RowAction::Status));
        assert!(!in_flight.is_row_busy(&id));
        assert!(in_flight.begin(&id, RowAction::Status));
    }

    #[test]
    fn guard_releases_on_every_exit_path() {
        let released = Cell::new(0);

        let attempt = |fail: bool| -> Result<(), &'static str> {
            let _guard = ReleaseGuard::new(|| released.set(released.get() + 1));
            if fail {
                return Err("boom");
            }
            Ok(())
        };

        assert!(attempt(true).is_err());
        assert!(attempt(false).is_ok());
        assert_eq!(released.get(), 2);
    }
}

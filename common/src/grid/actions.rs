//! Dialog and row-action transitions of the data grid.
//!
//! `RowActions::apply` is the only place the details sheet, the delete
//! confirmation and the per-row in-flight flags change. It never performs a
//! request itself; it answers with an `Effect` the component carries out.

use crate::error::{ApiError, Recovery};
use crate::grid::inflight::{InFlight, RowAction};
use crate::model::RecordId;

#[derive(Debug, Clone, PartialEq)]
pub enum RowEvent {
    ShowDetails(RecordId),
    CloseDetails,
    AskDelete(RecordId),
    CancelDelete,
    ConfirmDelete,
    ChangeStatus(RecordId),
    /// A request finished, whatever its outcome.
    Settled(RecordId, RowAction),
    Succeeded,
    Failed(ApiError),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Nothing changed.
    None,
    Render,
    /// Send `action` for the record. Its in-flight flag is already claimed.
    Send(RecordId, RowAction),
    /// Ask the owner of the records for a fresh copy.
    Refetch,
    Recover(Recovery),
}

impl Effect {
    pub fn should_render(&self) -> bool {
        matches!(self, Effect::Render | Effect::Send(..))
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct RowActions {
    in_flight: InFlight,
    details: Option<RecordId>,
    confirm_delete: Option<RecordId>,
    /// Bumped whenever a status change settles, so status controls can be
    /// rebuilt without the last choice still selected.
    status_revision: u32,
}

impl RowActions {
    pub fn details(&self) -> Option<&RecordId> {
        self.details.as_ref()
    }

    pub fn confirm_delete(&self) -> Option<&RecordId> {
        self.confirm_delete.as_ref()
    }

    pub fn in_flight(&self) -> &InFlight {
        &self.in_flight
    }

    pub fn status_revision(&self) -> u32 {
        self.status_revision
    }

    /// `can_manage` gates every event that could lead to a mutation.
    pub fn apply(&mut self, event: RowEvent, can_manage: bool) -> Effect {
        match event {
            RowEvent::ShowDetails(id) => {
                self.details = Some(id);
                Effect::Render
            }
            RowEvent::CloseDetails => rendered_if(self.details.take().is_some()),
            RowEvent::AskDelete(id) => {
                if !can_manage {
                    return Effect::None;
                }
                self.confirm_delete = Some(id);
                Effect::Render
            }
            RowEvent::CancelDelete => rendered_if(self.confirm_delete.take().is_some()),
            RowEvent::ConfirmDelete => match self.confirm_delete.take() {
                Some(id) if can_manage => self.claim(id, RowAction::Delete),
                Some(_) => Effect::Render,
                None => Effect::None,
            },
            RowEvent::ChangeStatus(id) => {
                if !can_manage {
                    return Effect::None;
                }
                self.claim(id, RowAction::Status)
            }
            RowEvent::Settled(id, action) => {
                if action == RowAction::Status {
                    self.status_revision = self.status_revision.wrapping_add(1);
                }
                rendered_if(self.in_flight.finish(&id, action) || action == RowAction::Status)
            }
            RowEvent::Succeeded => Effect::Refetch,
            RowEvent::Failed(error) => Effect::Recover(error.recovery()),
        }
    }

    /// Drops dialog targets for which `exists` no longer holds.
    pub fn forget_missing(&mut self, exists: impl Fn(&RecordId) -> bool) {
        if self.details.as_ref().is_some_and(|id| !exists(id)) {
            self.details = None;
        }
        if self.confirm_delete.as_ref().is_some_and(|id| !exists(id)) {
            self.confirm_delete = None;
        }
    }

    fn claim(&mut self, id: RecordId, action: RowAction) -> Effect {
        if self.in_flight.begin(&id, action) {
            Effect::Send(id, action)
        } else {
            // The confirmation may have closed even though nothing is sent.
            Effect::Render
        }
    }
}

fn rendered_if(changed: bool) -> Effect {
    if changed { Effect::Render } else { Effect::None }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewers_cannot_open_the_delete_confirmation() {
        let mut rows = RowActions::default();
        assert_eq!(rows.apply(RowEvent::AskDelete("1".into()), false), Effect::None);
        assert_eq!(rows.confirm_delete(), None);
        assert_eq!(rows.apply(RowEvent::ChangeStatus("1".into()), false), Effect::None);
        assert!(rows.in_flight().is_empty());
    }

    #[test]
    fn settling_a_status_change_bumps_the_revision() {
        let mut rows = RowActions::default();
        let id = RecordId::from("4");
        assert_eq!(
            rows.apply(RowEvent::ChangeStatus(id.clone()), true),
            Effect::Send(id.clone(), RowAction::Status)
        );
        assert_eq!(rows.status_revision(), 0);
        assert!(rows.apply(RowEvent::Settled(id.clone(), RowAction::Status), true).should_render());
        assert_eq!(rows.status_revision(), 1);
        assert!(!rows.in_flight().is_pending(&id, RowAction::Status));
    }

    #[test]
    fn vanished_records_close_their_dialogs() {
        let mut rows = RowActions::default();
        rows.apply(RowEvent::ShowDetails("1".into()), true);
        rows.apply(RowEvent::AskDelete("2".into()), true);
        rows.forget_missing(|id| id.as_str() == "2");
        assert_eq!(rows.details(), None);
        assert_eq!(rows.confirm_delete(), Some(&RecordId::from("2")));
    }
}

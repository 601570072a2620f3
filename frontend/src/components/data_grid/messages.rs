use common::error::ApiError;
use common::grid::filter::FilterValue;
use common::grid::inflight::RowAction;
use common::grid::record::StatusAction;
use common::model::RecordId;

pub enum Msg {
    Search(String),
    /// `None` clears the filter on that field.
    Filter(&'static str, Option<FilterValue>),
    ResetFilters,
    GoToPage(usize),
    ShowDetails(RecordId),
    CloseDetails,
    AskDelete(RecordId),
    CancelDelete,
    ConfirmDelete,
    ChangeStatus(RecordId, StatusAction),
    /// A mutation finished, whatever its outcome; releases the row flag.
    Settled(RecordId, RowAction),
    Succeeded(String),
    Failed(ApiError),
}

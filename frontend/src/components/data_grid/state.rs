use std::marker::PhantomData;

use common::grid::actions::RowActions;
use common::grid::GridState;
use common::model::RecordId;

use crate::api::resources::GridResource;

/// State of one grid instance. Filters and page live here only; they are
/// lost when the grid unmounts.
pub struct DataGrid<R: GridResource> {
    pub grid: GridState,

    /// Open dialogs and per-row mutation flags.
    pub rows: RowActions,

    _record: PhantomData<R>,
}

impl<R: GridResource> DataGrid<R> {
    pub fn new() -> Self {
        Self {
            grid: GridState::default(),
            rows: RowActions::default(),
            _record: PhantomData,
        }
    }

    pub fn find<'a>(&self, records: &'a [R], id: &RecordId) -> Option<&'a R> {
        records.iter().find(|record| record.id() == id)
    }

    /// Drops dialog targets that vanished from `records` after a refetch.
    pub fn forget_missing(&mut self, records: &[R]) {
        self.rows
            .forget_missing(|id| records.iter().any(|record| record.id() == id));
    }
}

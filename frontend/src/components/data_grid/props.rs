//! Properties for `DataGrid`.
//!
//! The grid never fetches. Its parent hands over the full record set and a
//! refetch handle, and the grid calls that handle after every successful
//! mutation.

use std::rc::Rc;

use yew::prelude::*;

use crate::api::resources::GridResource;

#[derive(Properties, PartialEq)]
pub struct DataGridProps<R: GridResource> {
    /// Every record of the collection, unfiltered.
    pub records: Rc<Vec<R>>,

    /// First load in progress; nothing to show yet.
    #[prop_or_default]
    pub loading: bool,

    /// A refetch is running while the previous rows stay on screen.
    #[prop_or_default]
    pub refreshing: bool,

    /// The fetch failed and `records` is empty because of it.
    #[prop_or_default]
    pub load_failed: bool,

    pub on_refetch: Callback<()>,

    /// Whether delete and status actions are rendered.
    #[prop_or_default]
    pub can_manage: bool,
}

//! Generic admin table: search, per-field filters, pagination and row
//! actions for any `GridResource`.
//!
//! The rows on screen are recomputed on every render from the full record
//! set handed in by the parent, the filter state and the page number. The
//! grid never edits the records; a successful mutation asks the parent to
//! refetch and the change shows up with the new props.

use yew::prelude::*;

mod dialogs;
mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

use messages::Msg;
use props::DataGridProps;
pub use state::DataGrid;

use crate::api::resources::GridResource;

impl<R: GridResource> Component for DataGrid<R> {
    type Message = Msg;
    type Properties = DataGridProps<R>;

    fn create(_ctx: &Context<Self>) -> Self {
        DataGrid::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        let records = ctx.props().records.as_slice();
        self.grid.clamp_to(records);
        self.forget_missing(records);
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}

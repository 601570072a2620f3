use crate::app::App;

mod api;
mod app;
mod components;
mod config;
mod pages;
mod routes;
mod session;
mod toast;
mod tops_sheet;

fn main() {
    yew::Renderer::<App>::new().render();
}

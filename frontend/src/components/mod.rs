pub mod data_grid;
pub mod nav_bar;
pub mod pagination;
pub mod rich_text;

//! Reusable UI components

pub mod movie_table;
mod progress_bar;

pub use movie_table::{MovieTable, RowDelete, RowUpdate};
pub use progress_bar::ProgressBar;

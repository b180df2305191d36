mod export;
mod render;

pub use export::export_csv;
pub use render::{render_list, render_table, render_totals};

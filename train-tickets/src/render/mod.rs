//! Terminal table rendering.

mod rows;
mod table;

pub use rows::{DisplayMode, RenderConfig, render_trains, train_row, train_table};
pub use table::{Cell, Line, Table, Tone};

mod reader;
mod types;
mod writer;

pub use reader::read_undo_log;
pub use types::*;
pub use writer::write_undo_log;

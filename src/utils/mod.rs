mod format;

pub use format::{format_number, fmt_num};

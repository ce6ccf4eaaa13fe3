pub mod common;
pub mod par_line_span;
pub mod par_log_span;
pub mod sequential;

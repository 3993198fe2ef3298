pub mod log;

pub use log::{
    detect_line_type, parse_lines, parse_log_reader, parse_section_timestamp, BlockState,
    LineParser, LogLineType,
};

mod report;

pub use report::{format_header, format_row, format_tenths, print_report, rank_by_weight, write_report};

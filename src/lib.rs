pub mod error;
pub mod models;
pub mod output;
pub mod parsers;
pub mod processors;
pub mod utils;

// 주요 기능 재내보내기(re-exporting)
pub use error::{ParseError, ParseErrorKind, Result, TrafficError};
pub use models::{DateSection, Event, RequestRecord, RequestSummary};
pub use output::{print_report, write_report};
pub use parsers::parse_log_reader;
pub use processors::{analyze_log_file, analyze_reader, calculate_statistics, Aggregator, Analysis, GlobalTotals};

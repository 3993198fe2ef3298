pub mod aggregator;
pub mod statistics;

pub use aggregator::Aggregator;
pub use statistics::{calculate_statistics, GlobalTotals};

use crate::error::{ParseError, Result, TrafficError};
use crate::log;
use crate::parsers::parse_log_reader;
use crate::utils::constants::READ_BUFFER_SIZE;
use crate::utils::open_utf8_reader;
use std::io::BufRead;
use std::path::Path;

/// 한 번의 실행 결과
#[derive(Debug)]
pub struct Analysis {
    pub aggregator: Aggregator,
    pub totals: GlobalTotals,
    pub diagnostics: Vec<ParseError>,
    pub line_count: usize,
}

/// 리더 전체를 파싱, 집계하고 통계까지 계산한다.
/// 파싱 진단은 발견 즉시 stdout 으로 출력하고 결과에도 모아 둔다.
pub fn analyze_reader<R: BufRead>(reader: R) -> Result<Analysis> {
    let mut aggregator = Aggregator::new();
    let mut diagnostics = Vec::new();

    let line_count = parse_log_reader(reader, |outcome| {
        if let Err(err) = outcome.and_then(|event| aggregator.apply(event)) {
            log!("{err}");
            diagnostics.push(err);
        }
    })
    .map_err(TrafficError::Read)?;

    let totals = calculate_statistics(&mut aggregator);

    Ok(Analysis {
        aggregator,
        totals,
        diagnostics,
        line_count,
    })
}

/// 로그 파일을 열어 분석한다. 열 수 없으면 보고서 없이 실패한다.
pub fn analyze_log_file(path: &Path) -> Result<Analysis> {
    let reader = open_utf8_reader(path, READ_BUFFER_SIZE).map_err(|source| {
        TrafficError::UnopenableInput {
            path: path.to_path_buf(),
            source,
        }
    })?;

    analyze_reader(reader)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseErrorKind;
    use rand::random;
    use std::fs;
    use std::path::PathBuf;

    const SAMPLE: &str = "\
| 2024-01-01 00:00:00 ------------------------------
Key: A
Bytes read: 100
Bytes written: 0
Calls: 5
| 2024-01-01 00:00:10 ------------------------------
";

    fn write_temp_log(contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("traffic_{}.log", random::<u64>()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_analyze_log_file() {
        let path = write_temp_log(SAMPLE);
        let analysis = analyze_log_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(analysis.line_count, 6);
        assert!(analysis.diagnostics.is_empty());
        assert_eq!(analysis.totals.interval_seconds, 10);
        assert_eq!(analysis.totals.total_reads, 100);
        assert_eq!(analysis.totals.total_calls, 5);

        let a = analysis.aggregator.summary("A").unwrap();
        assert_eq!(a.reads_per_second, 10.0);
        assert_eq!(a.weight, 100.0);
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let path = std::env::temp_dir().join(format!("traffic_missing_{}.log", random::<u64>()));
        match analyze_log_file(&path) {
            Err(TrafficError::UnopenableInput { path: p, .. }) => assert_eq!(p, path),
            other => panic!("Expected UnopenableInput, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_block_contributes_nothing() {
        let input = "\
| 2024-01-01 00:00:00
Key: A
Bytes read: 10
Bytes written: 10
Calls: 1
Key: B
this is not a read line
Bytes written: 10
Calls: 1
| 2024-01-01 00:00:10
";
        let analysis = analyze_reader(input.as_bytes()).unwrap();

        assert!(analysis.aggregator.summary("B").is_none());
        assert_eq!(analysis.totals.total_reads, 10);
        assert_eq!(analysis.diagnostics.len(), 1);
        assert_eq!(analysis.diagnostics[0].line, 7);
        assert_eq!(
            analysis.diagnostics[0].kind,
            ParseErrorKind::UnexpectedLine {
                expected: "Bytes read: "
            }
        );
    }

    #[test]
    fn test_orphan_request_is_dropped() {
        let input = "\
Key: early
Bytes read: 1
Bytes written: 1
Calls: 1
| 2024-01-01 00:00:00
Key: late
Bytes read: 2
Bytes written: 2
Calls: 2
";
        let analysis = analyze_reader(input.as_bytes()).unwrap();

        assert!(analysis.aggregator.summary("early").is_none());
        assert!(analysis.aggregator.summary("late").is_some());
        assert_eq!(analysis.diagnostics.len(), 1);
        assert_eq!(analysis.diagnostics[0].kind, ParseErrorKind::OrphanRequest);
        assert_eq!(analysis.diagnostics[0].line, 1);
    }

    #[test]
    fn test_diagnostics_keep_input_order() {
        let input = "\
| bad date here......
| 2024-01-01 00:00:00
Key: A
Bytes read: x
Key: B
Bytes read: 1
";
        let analysis = analyze_reader(input.as_bytes()).unwrap();
        let kinds: Vec<_> = analysis.diagnostics.iter().map(|d| d.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![
                ParseErrorKind::MalformedTimestamp,
                ParseErrorKind::InvalidInteger {
                    field: "Bytes read: "
                },
                ParseErrorKind::UnexpectedEnd,
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        let analysis = analyze_reader("".as_bytes()).unwrap();
        assert_eq!(analysis.line_count, 0);
        assert!(analysis.aggregator.sections().is_empty());
        assert_eq!(analysis.totals, GlobalTotals::default());
    }
}

use std::fmt;
use std::io;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, TrafficError>;

/// 분석을 중단시키는 오류
#[derive(Debug, thiserror::Error)]
pub enum TrafficError {
    #[error("cannot open '{}': {source}", .path.display())]
    UnopenableInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read input: {0}")]
    Read(#[source] io::Error),

    #[error("failed to write report: {0}")]
    Report(#[source] io::Error),
}

/// 파싱 중 복구 가능한 오류 종류
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("expecting a date")]
    MalformedTimestamp,

    #[error("unexpected end of request")]
    UnexpectedEnd,

    #[error("expected: {expected}")]
    UnexpectedLine { expected: &'static str },

    #[error("expecting an integer after: {field}")]
    InvalidInteger { field: &'static str },

    #[error("request outside of any date section")]
    OrphanRequest,
}

/// 라인 번호와 원문을 함께 담은 파싱 진단
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub line: usize,
    pub kind: ParseErrorKind,
    pub text: String,
}

impl ParseError {
    pub fn new(line: usize, kind: ParseErrorKind, text: &str) -> Self {
        Self {
            line,
            kind,
            text: text.to_string(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Parse error at line :{}", self.line)?;
        write!(f, "{}   {}", self.kind, self.text)
    }
}

impl std::error::Error for ParseError {}

use crate::error::{ParseError, ParseErrorKind};
use crate::models::{DateSection, Event, RequestRecord};
use crate::utils::constants::{
    SECTION_PREFIX, TAG_CALLS, TAG_KEY, TAG_READ, TAG_WRITE, TIMESTAMP_FORMAT, TIMESTAMP_LEN,
    TIMESTAMP_START,
};
use crate::utils::strip_utf8_bom;
use chrono::NaiveDateTime;
use std::io::{self, BufRead};

/// 블록 밖에서 만나는 로그 라인의 타입
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogLineType<'a> {
    /// `|` 로 시작하는 섹션 라인
    Section,
    /// `Key: ` 로 시작하는 요청 블록 헤더
    Key { name: &'a str },
    /// 일반 라인 (무시)
    Other,
}

/// 로그 라인 타입 감지
pub fn detect_line_type(line: &str) -> LogLineType<'_> {
    if line.starts_with(SECTION_PREFIX) {
        return LogLineType::Section;
    }

    if let Some(name) = line.strip_prefix(TAG_KEY) {
        return LogLineType::Key { name };
    }

    LogLineType::Other
}

/// 섹션 라인의 고정 위치에서 타임스탬프를 읽는다
pub fn parse_section_timestamp(line: &str) -> Option<NaiveDateTime> {
    let stamp = line.get(TIMESTAMP_START..TIMESTAMP_START + TIMESTAMP_LEN)?;
    NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT).ok()
}

// `<tag><u64>` 형태의 필드 라인 하나를 읽는다
fn parse_field(line_number: usize, line: &str, tag: &'static str) -> Result<u64, ParseError> {
    let value = line.strip_prefix(tag).ok_or_else(|| {
        ParseError::new(
            line_number,
            ParseErrorKind::UnexpectedLine { expected: tag },
            line,
        )
    })?;

    value.parse::<u64>().map_err(|_| {
        ParseError::new(
            line_number,
            ParseErrorKind::InvalidInteger { field: tag },
            line,
        )
    })
}

/// 요청 블록 상태. `Key:` 다음 세 줄을 순서대로 기다린다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockState {
    ExpectName,
    ExpectReads,
    ExpectWrites,
    ExpectCalls,
}

/// 한 줄씩 입력받아 이벤트를 만드는 파서
///
/// 블록 도중 실패하면 진행 중이던 레코드를 버리고 `ExpectName` 으로 돌아간다.
/// 실패를 일으킨 라인은 소비된 것으로 보고 다시 분류하지 않는다.
#[derive(Debug)]
pub struct LineParser {
    state: BlockState,
    pending: RequestRecord,
    last_line: usize,
    last_text: String,
}

impl LineParser {
    pub fn new() -> Self {
        Self {
            state: BlockState::ExpectName,
            pending: RequestRecord {
                line: 0,
                name: String::new(),
                reads: 0,
                writes: 0,
                calls: 0,
            },
            last_line: 0,
            last_text: String::new(),
        }
    }

    pub fn state(&self) -> BlockState {
        self.state
    }

    /// 라인 하나를 처리한다. 이벤트나 진단이 나오면 `Some` 을 돌려준다.
    pub fn feed(&mut self, line_number: usize, line: &str) -> Option<Result<Event, ParseError>> {
        let state = std::mem::replace(&mut self.state, BlockState::ExpectName);

        match state {
            BlockState::ExpectName => match detect_line_type(line) {
                LogLineType::Section => Some(
                    parse_section_timestamp(line)
                        .map(|timestamp| Event::NewDateSection(DateSection::new(line_number, timestamp)))
                        .ok_or_else(|| {
                            ParseError::new(line_number, ParseErrorKind::MalformedTimestamp, line)
                        }),
                ),
                LogLineType::Key { name } => {
                    self.pending.line = line_number;
                    self.pending.name = name.to_string();
                    self.advance(BlockState::ExpectReads, line_number, line);
                    None
                }
                LogLineType::Other => None,
            },
            BlockState::ExpectReads => match parse_field(line_number, line, TAG_READ) {
                Ok(reads) => {
                    self.pending.reads = reads;
                    self.advance(BlockState::ExpectWrites, line_number, line);
                    None
                }
                Err(e) => Some(Err(e)),
            },
            BlockState::ExpectWrites => match parse_field(line_number, line, TAG_WRITE) {
                Ok(writes) => {
                    self.pending.writes = writes;
                    self.advance(BlockState::ExpectCalls, line_number, line);
                    None
                }
                Err(e) => Some(Err(e)),
            },
            BlockState::ExpectCalls => Some(parse_field(line_number, line, TAG_CALLS).map(|calls| {
                self.pending.calls = calls;
                Event::RequestRecord(self.pending.clone())
            })),
        }
    }

    /// 입력이 끝났을 때 호출한다. 블록이 열려 있으면 진단을 돌려준다.
    pub fn finish(&mut self) -> Option<ParseError> {
        let state = std::mem::replace(&mut self.state, BlockState::ExpectName);
        if state == BlockState::ExpectName {
            return None;
        }

        Some(ParseError::new(
            self.last_line,
            ParseErrorKind::UnexpectedEnd,
            &self.last_text,
        ))
    }

    fn advance(&mut self, next: BlockState, line_number: usize, line: &str) {
        self.state = next;
        self.last_line = line_number;
        self.last_text.clear();
        self.last_text.push_str(line);
    }
}

impl Default for LineParser {
    fn default() -> Self {
        Self::new()
    }
}

/// 메모리에 있는 라인들을 새 파서로 처리하고 결과를 순서대로 모은다.
pub fn parse_lines<I, S>(lines: I) -> Vec<Result<Event, ParseError>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parser = LineParser::new();
    let mut outcomes = Vec::new();

    for (idx, line) in lines.into_iter().enumerate() {
        if let Some(outcome) = parser.feed(idx + 1, line.as_ref()) {
            outcomes.push(outcome);
        }
    }

    if let Some(err) = parser.finish() {
        outcomes.push(Err(err));
    }

    outcomes
}

/// 리더에서 라인을 읽으며 결과가 나올 때마다 `on_outcome` 을 호출한다.
/// 읽은 라인 수를 돌려준다.
pub fn parse_log_reader<R, F>(reader: R, mut on_outcome: F) -> io::Result<usize>
where
    R: BufRead,
    F: FnMut(Result<Event, ParseError>),
{
    let mut parser = LineParser::new();
    let mut line_count = 0;

    for line in reader.lines() {
        let line = line?;
        line_count += 1;
        let text = if line_count == 1 {
            strip_utf8_bom(&line)
        } else {
            &line
        };
        if let Some(outcome) = parser.feed(line_count, text) {
            on_outcome(outcome);
        }
    }

    if let Some(err) = parser.finish() {
        on_outcome(Err(err));
    }

    Ok(line_count)
}

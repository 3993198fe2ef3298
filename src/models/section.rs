use chrono::NaiveDateTime;

/// 로그의 `|` 라인 하나가 여는 보고 구간
#[derive(Debug, Clone, PartialEq)]
pub struct DateSection {
    pub line: usize, // 섹션 라인 번호 (1부터 시작)
    pub timestamp: NaiveDateTime,
    pub request_count: usize, // 이 구간에 붙은 요청 레코드 수
}

impl DateSection {
    pub fn new(line: usize, timestamp: NaiveDateTime) -> Self {
        Self {
            line,
            timestamp,
            request_count: 0,
        }
    }

    // epoch 기준 밀리초
    pub fn millis(&self) -> i64 {
        self.timestamp.and_utc().timestamp_millis()
    }
}

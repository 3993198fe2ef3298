/// `Key:` 로 시작하는 4줄 블록 하나. 집계 후에는 보관하지 않는다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestRecord {
    pub line: usize, // `Key:` 라인 번호
    pub name: String,
    pub reads: u64,
    pub writes: u64,
    pub calls: u64,
}

/// 요청 이름별 누적 값과 파생 통계
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestSummary {
    pub name: String,
    pub reads: u64,
    pub writes: u64,
    pub calls: u64,
    pub reads_per_second: f64,
    pub writes_per_second: f64,
    pub calls_per_second: f64,
    pub weight: f64, // 전체 read+write 바이트 중 비율(%)
}

impl RequestSummary {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub fn add_record(&mut self, record: &RequestRecord) {
        self.reads = self.reads.saturating_add(record.reads);
        self.writes = self.writes.saturating_add(record.writes);
        self.calls = self.calls.saturating_add(record.calls);
    }

    pub fn traffic(&self) -> u64 {
        self.reads.saturating_add(self.writes)
    }
}

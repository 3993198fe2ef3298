use crate::error::{ParseError, ParseErrorKind};
use crate::models::{DateSection, Event, RequestRecord, RequestSummary};
use std::collections::HashMap;

/// 이벤트를 요청 이름별 누적 값과 섹션 목록으로 접는다
#[derive(Debug, Default, Clone)]
pub struct Aggregator {
    sections: Vec<DateSection>,
    summaries: Vec<RequestSummary>, // 처음 등장한 순서 유지
    index: HashMap<String, usize>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, event: Event) -> Result<(), ParseError> {
        match event {
            Event::NewDateSection(section) => {
                self.sections.push(section);
                Ok(())
            }
            Event::RequestRecord(record) => self.add_record(&record),
        }
    }

    fn add_record(&mut self, record: &RequestRecord) -> Result<(), ParseError> {
        // 아직 섹션이 없으면 붙일 곳이 없다
        let Some(section) = self.sections.last_mut() else {
            return Err(ParseError::new(
                record.line,
                ParseErrorKind::OrphanRequest,
                &format!("Key: {}", record.name),
            ));
        };
        section.request_count += 1;

        let idx = match self.index.get(&record.name) {
            Some(&idx) => idx,
            None => {
                self.summaries.push(RequestSummary::new(&record.name));
                self.index.insert(record.name.clone(), self.summaries.len() - 1);
                self.summaries.len() - 1
            }
        };
        self.summaries[idx].add_record(record);

        Ok(())
    }

    pub fn sections(&self) -> &[DateSection] {
        &self.sections
    }

    pub fn current_section(&self) -> Option<&DateSection> {
        self.sections.last()
    }

    pub fn summaries(&self) -> &[RequestSummary] {
        &self.summaries
    }

    pub(crate) fn summaries_mut(&mut self) -> &mut [RequestSummary] {
        &mut self.summaries
    }

    pub fn summary(&self, name: &str) -> Option<&RequestSummary> {
        self.index.get(name).map(|&idx| &self.summaries[idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn section(line: usize, sec: u32) -> Event {
        let ts = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, sec)
            .unwrap();
        Event::NewDateSection(DateSection::new(line, ts))
    }

    fn record(name: &str, reads: u64, writes: u64, calls: u64) -> Event {
        Event::RequestRecord(RequestRecord {
            line: 0,
            name: name.to_string(),
            reads,
            writes,
            calls,
        })
    }

    #[test]
    fn test_records_are_summed_by_name() {
        let mut agg = Aggregator::new();
        agg.apply(section(1, 0)).unwrap();
        agg.apply(record("A", 10, 1, 1)).unwrap();
        agg.apply(record("B", 5, 5, 2)).unwrap();
        agg.apply(record("A", 20, 2, 3)).unwrap();

        let a = agg.summary("A").unwrap();
        assert_eq!((a.reads, a.writes, a.calls), (30, 3, 4));
        let b = agg.summary("B").unwrap();
        assert_eq!((b.reads, b.writes, b.calls), (5, 5, 2));
        assert_eq!(a.weight, 0.0);
    }

    #[test]
    fn test_insertion_order_is_kept() {
        let mut agg = Aggregator::new();
        agg.apply(section(1, 0)).unwrap();
        for name in ["z", "a", "m", "a", "z"] {
            agg.apply(record(name, 1, 1, 1)).unwrap();
        }
        let names: Vec<_> = agg.summaries().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_orphan_request_is_rejected() {
        let mut agg = Aggregator::new();
        let err = agg.apply(record("A", 1, 1, 1)).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::OrphanRequest);
        assert_eq!(err.text, "Key: A");
        assert!(agg.summaries().is_empty());
        assert!(agg.current_section().is_none());
    }

    #[test]
    fn test_records_attach_to_current_section() {
        let mut agg = Aggregator::new();
        agg.apply(section(1, 0)).unwrap();
        agg.apply(record("A", 1, 1, 1)).unwrap();
        agg.apply(section(6, 10)).unwrap();
        agg.apply(record("A", 1, 1, 1)).unwrap();
        agg.apply(record("B", 1, 1, 1)).unwrap();

        let counts: Vec<_> = agg.sections().iter().map(|s| s.request_count).collect();
        assert_eq!(counts, vec![1, 2]);
        assert_eq!(agg.current_section().map(|s| s.line), Some(6));
    }

    #[test]
    fn test_fold_is_repeatable() {
        let events = vec![
            section(1, 0),
            record("A", 3, 4, 5),
            record("B", 1, 0, 1),
            section(9, 30),
            record("A", 3, 4, 5),
        ];

        let run = || {
            let mut agg = Aggregator::new();
            for event in events.clone() {
                agg.apply(event).unwrap();
            }
            agg.summaries().to_vec()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_accumulators_saturate() {
        let mut agg = Aggregator::new();
        agg.apply(section(1, 0)).unwrap();
        agg.apply(record("A", u64::MAX, 0, 0)).unwrap();
        agg.apply(record("A", 1, 0, 0)).unwrap();
        assert_eq!(agg.summary("A").unwrap().reads, u64::MAX);
    }
}

use super::{DateSection, RequestRecord};

// 파서가 집계기로 넘기는 이벤트
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    NewDateSection(DateSection),
    RequestRecord(RequestRecord),
}

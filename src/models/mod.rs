mod event;
mod request;
mod section;

pub use event::Event;
pub use request::{RequestRecord, RequestSummary};
pub use section::DateSection;

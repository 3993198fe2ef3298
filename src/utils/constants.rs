// 섹션 라인 접두사와 타임스탬프 위치 (바이트 오프셋)
pub const SECTION_PREFIX: &str = "|";
pub const TIMESTAMP_START: usize = 2;
pub const TIMESTAMP_LEN: usize = 19;
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// 요청 블록 4줄의 접두사
pub const TAG_KEY: &str = "Key: ";
pub const TAG_READ: &str = "Bytes read: ";
pub const TAG_WRITE: &str = "Bytes written: ";
pub const TAG_CALLS: &str = "Calls: ";

// 밀리초로 변환하기 위한 상수 (초에서 밀리초로)
pub const MILLISECONDS: i64 = 1000;

// 입력 버퍼 크기
pub const READ_BUFFER_SIZE: usize = 64 * 1024;

use std::io::{self, Write};

// 진단 메시지와 보고서가 같은 stdout에 순서대로 섞여 나가야 하므로
// 모든 출력은 잠금을 잡은 stdout 핸들을 통해 기록한다.
pub struct Logger;

impl Logger {
    pub fn log(message: &str) {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        if let Err(e) = writeln!(handle, "{message}") {
            eprintln!("stdout 쓰기 실패: {e}");
        }
    }

    pub fn log_error(message: &str) {
        let stderr = io::stderr();
        let mut handle = stderr.lock();
        // stderr 마저 실패하면 더 보고할 곳이 없다
        let _ = writeln!(handle, "ERROR: {message}");
    }

    pub fn flush() -> io::Result<()> {
        io::stdout().flush()?;
        io::stderr().flush()
    }
}

// 매크로 정의
#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::utils::Logger::log(&message);
    }};
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::utils::Logger::log_error(&message);
    }};
}

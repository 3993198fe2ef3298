use std::env;
use std::path::Path;
use std::process::ExitCode;
use traffic::utils::Logger;
use traffic::{analyze_log_file, log, log_error, print_report};

fn print_usage() {
    log!("Usage : traffic [file path]");
}

fn run(log_file: &str) -> traffic::Result<()> {
    let analysis = analyze_log_file(Path::new(log_file))?;
    print_report(&analysis)
}

fn main() -> ExitCode {
    // 첫 번째 위치 인수만 사용하고 나머지는 무시
    let args: Vec<String> = env::args().collect();

    // 인자가 없으면 사용법 출력 (오류 종료 아님)
    let Some(log_file) = args.get(1) else {
        log!("Error : no file name specified");
        print_usage();
        return ExitCode::SUCCESS;
    };

    let status = match run(log_file) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log_error!("{e}");
            ExitCode::FAILURE
        }
    };

    if let Err(e) = Logger::flush() {
        eprintln!("출력 flush 실패: {e}");
    }
    status
}

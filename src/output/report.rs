use crate::error::{Result, TrafficError};
use crate::models::{DateSection, RequestSummary};
use crate::processors::{Analysis, GlobalTotals};
use crate::utils::constants::TIMESTAMP_FORMAT;
use std::io::{self, Write};

/// 비중 내림차순으로 정렬한다. 비중이 같으면 처음 등장한 순서를 유지한다 (stable sort).
pub fn rank_by_weight(summaries: &[RequestSummary]) -> Vec<&RequestSummary> {
    let mut ranked: Vec<&RequestSummary> = summaries.iter().collect();
    ranked.sort_by(|a, b| b.weight.total_cmp(&a.weight));
    ranked
}

pub fn format_header() -> String {
    format!(
        "{:>10} | {:>10} | {:>7} | {:>12} | {:>7} | {:>12} | {:>7} | {}",
        "% Traffic", " CALLS", "Ca/s", "READS", "Re/s", "WRITES", "Wr/s", "REQUEST"
    )
}

/// 소수 첫째 자리까지 반올림한 문자열.
///
/// 최단 십진 표현(`{}`)을 기준으로 둘째 자리가 5 이상이면 올린다 (HALF_UP).
/// `{:.1}` 은 2진 값 기준으로 반올림해서 0.25 가 "0.2" 가 된다.
pub fn format_tenths(value: f64) -> String {
    if !value.is_finite() {
        return format!("{value:.1}");
    }

    let shortest = value.abs().to_string();
    let (int_part, frac_part) = shortest.split_once('.').unwrap_or((&shortest, ""));
    let frac = frac_part.as_bytes();

    let mut digits: Vec<u8> = int_part.bytes().collect();
    digits.push(frac.first().copied().unwrap_or(b'0'));

    if frac.get(1).is_some_and(|&d| d >= b'5') {
        // 끝자리부터 올림 전파
        let mut carry = true;
        for d in digits.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let (whole, tenth) = digits.split_at(digits.len() - 1);
    let sign = if value.is_sign_negative() { "-" } else { "" };
    format!(
        "{sign}{}.{}",
        String::from_utf8_lossy(whole),
        tenth[0] as char
    )
}

pub fn format_row(summary: &RequestSummary) -> String {
    format!(
        "{:>9}% | {:10} | {:>7} | {:12} | {:>7} | {:12} | {:>7} | {}",
        format_tenths(summary.weight),
        summary.calls,
        format_tenths(summary.calls_per_second),
        summary.reads,
        format_tenths(summary.reads_per_second),
        summary.writes,
        format_tenths(summary.writes_per_second),
        summary.name
    )
}

/// 섹션 시작 시각. 시간대에 의존하지 않도록 `Date.toString()` 형식
/// (`Mon Jan 01 00:00:00 UTC 2024`) 대신 입력과 같은 `%Y-%m-%d %H:%M:%S` 로 쓴다.
/// 섹션이 없으면 "n/a".
fn format_section(section: Option<&DateSection>) -> String {
    section
        .map(|s| s.timestamp.format(TIMESTAMP_FORMAT).to_string())
        .unwrap_or_else(|| "n/a".to_string())
}

fn write_global_stats<W: Write>(
    out: &mut W,
    sections: &[DateSection],
    totals: &GlobalTotals,
) -> io::Result<()> {
    writeln!(out, "Summary: ")?;
    writeln!(out, "=========")?;
    writeln!(out, "Start: {}", format_section(sections.first()))?;
    writeln!(out, "End: {}", format_section(sections.last()))?;
    writeln!(out, "Calls: {}", totals.total_calls)?;
    writeln!(out, "Bytes read: {}", totals.total_reads)?;
    writeln!(out, "Bytes written: {}", totals.total_writes)?;
    writeln!(out, "Calls/s: {}", totals.per_second(totals.total_calls))?;
    writeln!(out, "Bytes read/s: {}", totals.per_second(totals.total_reads))?;
    writeln!(out, "Bytes written/s: {}", totals.per_second(totals.total_writes))?;
    writeln!(out)?;
    writeln!(out)
}

/// 전체 요약 블록, 헤더, 요청별 행을 순서대로 쓴다
pub fn write_report<W: Write>(out: &mut W, analysis: &Analysis) -> io::Result<()> {
    write_global_stats(out, analysis.aggregator.sections(), &analysis.totals)?;
    writeln!(out, "{}", format_header())?;
    for summary in rank_by_weight(analysis.aggregator.summaries()) {
        writeln!(out, "{}", format_row(summary))?;
    }
    Ok(())
}

pub fn print_report(analysis: &Analysis) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_report(&mut handle, analysis)
        .and_then(|_| handle.flush())
        .map_err(TrafficError::Report)
}

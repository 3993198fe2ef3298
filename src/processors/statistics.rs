use crate::processors::Aggregator;
use crate::utils::constants::MILLISECONDS;

/// 전체 관측 구간의 합계
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GlobalTotals {
    pub total_reads: u64,
    pub total_writes: u64,
    pub total_calls: u64,
    pub interval_seconds: i64, // 첫 섹션부터 마지막 섹션까지 (초)
}

impl GlobalTotals {
    /// 합계를 구간 길이로 나눈 정수 값. 구간이 0이면 0.
    pub fn per_second(&self, total: u64) -> i64 {
        if self.interval_seconds == 0 {
            return 0;
        }
        i64::try_from(total).unwrap_or(i64::MAX) / self.interval_seconds
    }

    pub fn total_traffic(&self) -> u64 {
        self.total_reads.saturating_add(self.total_writes)
    }
}

/// 합계를 구한 뒤 각 요청의 초당 값과 비중을 채운다.
///
/// 섹션이 두 개 미만이면 구간을 잴 수 없으므로 초당 값과 비중은 0으로 남는다.
/// 합계는 항상 계산한다.
pub fn calculate_statistics(aggregator: &mut Aggregator) -> GlobalTotals {
    // 1단계: 합계
    let mut totals = aggregator
        .summaries()
        .iter()
        .fold(GlobalTotals::default(), |mut acc, s| {
            acc.total_reads = acc.total_reads.saturating_add(s.reads);
            acc.total_writes = acc.total_writes.saturating_add(s.writes);
            acc.total_calls = acc.total_calls.saturating_add(s.calls);
            acc
        });

    let (first, last) = match aggregator.sections() {
        [first, .., last] => (first.millis(), last.millis()),
        _ => return totals,
    };
    totals.interval_seconds = (last - first) / MILLISECONDS;

    // 2단계: 합계가 확정된 뒤에 초당 값과 비중
    let interval = totals.interval_seconds as f64;
    let traffic = totals.total_traffic();
    for summary in aggregator.summaries_mut() {
        if totals.interval_seconds != 0 {
            summary.reads_per_second = summary.reads as f64 / interval;
            summary.writes_per_second = summary.writes as f64 / interval;
            summary.calls_per_second = summary.calls as f64 / interval;
        }
        if traffic > 0 {
            summary.weight = 100.0 * summary.traffic() as f64 / traffic as f64;
        }
    }

    totals
}

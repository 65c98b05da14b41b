use std::io::Write as _;
use std::sync::{LazyLock, Mutex};

use dynamic_orientation::intervals::IntervalInstance;
use flexi_logger::{Logger, LoggerHandle};

pub mod slow_forest;

#[allow(dead_code)]
pub static LOGGER: LazyLock<Mutex<LoggerHandle>> = LazyLock::new(|| {
    Mutex::new(
        Logger::try_with_env_or_str("info")
            .unwrap()
            .write_mode(flexi_logger::WriteMode::SupportCapture)
            .log_to_stdout()
            .format(|w, now, record| {
                write!(
                    w,
                    "{} [{}] {}",
                    now.format("%H:%M:%S"),
                    &record.level().as_str()[0..1],
                    record.args(),
                )
            })
            .start()
            .unwrap(),
    )
});

#[allow(dead_code)]
pub fn init_logger() {
    let _ = &*LOGGER;
}

/// Recomputes the peak out-degree of a fully assigned instance the slow way: per vertex,
/// per timestamp, count the owned intervals containing it.
#[allow(dead_code)]
pub fn naive_interval_peak(ipi: &IntervalInstance) -> usize {
    let mut timelines = vec![vec![0usize; ipi.timeframe]; ipi.v_count];
    let mut peak = 0;
    for interval in &ipi.intervals {
        let owner = interval.assigned_node();
        for t in interval.start..=interval.end {
            timelines[owner][t] += 1;
            peak = peak.max(timelines[owner][t]);
        }
    }
    peak
}

//! Percent-complete tracking

/// Receives progress lines from an export run
pub trait ProgressSink: Send + Sync {
    fn report(&self, percent: u64, exported: u64, total: u64);
}

/// Prints `"{percent}% ({exported}/{total} values)"` to stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleProgress;

impl ProgressSink for ConsoleProgress {
    fn report(&self, percent: u64, exported: u64, total: u64) {
        println!("{}", progress_line(percent, exported, total));
    }
}

/// Console form of one progress report
pub fn progress_line(percent: u64, exported: u64, total: u64) -> String {
    format!("{percent}% ({exported}/{total} values)")
}

/// Reports each whole percentage once, in increasing order
#[derive(Debug, Clone)]
pub struct ProgressTracker {
    total: u64,
    last_percent: u64,
}

impl ProgressTracker {
    pub fn new(total: u64) -> Self {
        Self {
            total,
            last_percent: 0,
        }
    }

    /// Records the exported count and returns the new percentage if it moved
    ///
    /// Percentages are floored, so a jump from 3% to 47% reports 47 once.
    pub fn update(&mut self, exported: u64) -> Option<u64> {
        if self.total == 0 {
            return None;
        }

        let percent = ((exported as u128 * 100) / self.total as u128) as u64;
        if percent > self.last_percent {
            self.last_percent = percent;
            Some(percent)
        } else {
            None
        }
    }
}

//! Batch plan for an export range
//!
//! Computed purely from the layout, so it can be shown before any network
//! access (`plan` command and `export --dry-run`).

use crate::domain::{BatchIndex, BatchLayout, ExportRange};

/// Which batches an export touches and how much of each edge batch is used
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportPlan {
    pub range: ExportRange,
    pub values_per_batch: u64,
    pub first_batch: BatchIndex,
    pub last_batch: BatchIndex,
    /// Values of the first batch skipped before the range starts
    pub ignore_first: u64,
    /// Values taken from the last batch
    pub taken_from_last: u64,
}

impl ExportPlan {
    pub fn new(layout: &BatchLayout, range: ExportRange) -> Self {
        let values_per_batch = layout.values_per_batch();
        let first_batch = layout.first_batch(range.start_at());
        let last_batch = layout.first_batch(range.end_at());
        let ignore_first = layout.ignore_first(range.start_at());

        let taken_from_last = if first_batch == last_batch {
            range.how_many()
        } else {
            (range.end_at() - 1) % values_per_batch + 1
        };

        Self {
            range,
            values_per_batch,
            first_batch,
            last_batch,
            ignore_first,
            taken_from_last,
        }
    }

    /// Number of oracle reads the export performs
    pub fn batch_count(&self) -> u64 {
        self.last_batch.value() - self.first_batch.value() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_single_batch() {
        let plan = ExportPlan::new(&BatchLayout::default(), ExportRange::new(1, 10).unwrap());
        assert_eq!(plan.first_batch.value(), 1);
        assert_eq!(plan.last_batch.value(), 1);
        assert_eq!(plan.batch_count(), 1);
        assert_eq!(plan.ignore_first, 0);
        assert_eq!(plan.taken_from_last, 10);
    }

    #[test]
    fn test_plan_spanning_batches() {
        // values 400..=1000 -> batches 1..=3
        let plan = ExportPlan::new(&BatchLayout::default(), ExportRange::new(400, 601).unwrap());
        assert_eq!(plan.first_batch.value(), 1);
        assert_eq!(plan.last_batch.value(), 3);
        assert_eq!(plan.batch_count(), 3);
        assert_eq!(plan.ignore_first, 399);
        assert_eq!(plan.taken_from_last, 120);

        let total = (plan.values_per_batch - plan.ignore_first)
            + plan.values_per_batch * (plan.batch_count() - 2)
            + plan.taken_from_last;
        assert_eq!(total, plan.range.how_many());
    }

    #[test]
    fn test_plan_exact_batch_boundaries() {
        let plan = ExportPlan::new(&BatchLayout::default(), ExportRange::new(441, 880).unwrap());
        assert_eq!(plan.first_batch.value(), 2);
        assert_eq!(plan.last_batch.value(), 3);
        assert_eq!(plan.ignore_first, 0);
        assert_eq!(plan.taken_from_last, 440);
    }
}

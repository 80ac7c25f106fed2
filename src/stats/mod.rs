pub mod distribution;
pub mod summary;

pub use self::distribution::{compute_distribution, DistributionRow, LevelDistribution};
pub use self::summary::{compute_summary, SummaryStats};

/// `100 * part / whole`, or 0 when `whole` is 0.
pub(crate) fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        100.0 * part as f64 / whole as f64
    }
}

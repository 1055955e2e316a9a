//! Per-operation metrics.

/// Timing of one table operation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OperationMetrics {
    /// Wall-clock time spent in the admin service, in milliseconds.
    pub duration_ms: f64,
    /// Regions the table was created with. `None` for operations that create nothing.
    pub regions: Option<usize>,
}

impl OperationMetrics {
    pub fn new(duration_ms: f64) -> Self {
        Self {
            duration_ms,
            regions: None,
        }
    }

    pub fn with_regions(duration_ms: f64, regions: usize) -> Self {
        Self {
            duration_ms,
            regions: Some(regions),
        }
    }
}

use std::time::Duration;

/// Counters from one `load_data` run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadStats {
    /// Rows the producer published to the workers.
    pub rows_generated: u64,
    /// Rows covered by a successful commit.
    pub rows_inserted: u64,
    /// Successful commits across all workers.
    pub commits: u64,
    /// Workers that stopped on an error.
    pub failed_workers: usize,
    /// Wall time from start until every task joined.
    pub elapsed: Duration,
}

impl LoadStats {
    /// Calculate committed rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.elapsed.as_secs_f64() > 0.0 {
            self.rows_inserted as f64 / self.elapsed.as_secs_f64()
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_per_second() {
        let stats = LoadStats {
            rows_inserted: 500,
            elapsed: Duration::from_secs(2),
            ..Default::default()
        };
        assert_eq!(stats.rows_per_second(), 250.0);
    }

    #[test]
    fn test_rows_per_second_zero_elapsed() {
        assert_eq!(LoadStats::default().rows_per_second(), 0.0);
    }
}

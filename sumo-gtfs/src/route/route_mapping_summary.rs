use std::fmt::Display;

/// run level counters of a route mapping. every trip is either mapped or failed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RouteMappingSummary {
    pub total_trips: usize,
    pub mapped_trips: usize,
    pub failed_trips: usize,
}

impl RouteMappingSummary {
    pub fn coverage_percent(&self) -> f64 {
        coverage_percent(self.mapped_trips, self.total_trips)
    }

    pub fn log(&self) {
        log::info!("total trips: {}", self.total_trips);
        log::info!("mapped trips: {}", self.mapped_trips);
        log::info!("failed trips: {}", self.failed_trips);
        log::info!("coverage: {:.2}%", self.coverage_percent());
    }
}

impl Display for RouteMappingSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{},{},{},{:.2}",
            self.total_trips,
            self.mapped_trips,
            self.failed_trips,
            self.coverage_percent()
        )
    }
}

/// `100 * part / total`, or 0.0 when total is zero.
pub fn coverage_percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        100.0 * part as f64 / total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coverage_percent() {
        assert_eq!(coverage_percent(0, 0), 0.0);
        assert_eq!(coverage_percent(1, 4), 25.0);
        assert_eq!(coverage_percent(4, 4), 100.0);
    }

    #[test]
    fn test_display() {
        let summary = RouteMappingSummary {
            total_trips: 3,
            mapped_trips: 2,
            failed_trips: 1,
        };
        assert_eq!(summary.to_string(), "3,2,1,66.67");
    }
}

//! Spend, budget and progress for one day
//!
//! Metrics are derived from the day on every render and never stored, so
//! they cannot go stale after a mutation.

use tripdeck_core::Day;

/// Derived figures for a day
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DayMetrics {
    /// Stops marked completed
    pub completed_count: usize,
    /// All stops
    pub total_count: usize,
    /// Estimated cost of completed stops
    pub total_spent: f64,
    /// Estimated cost of all stops
    pub total_estimated: f64,
}

impl DayMetrics {
    /// Compute metrics for `day`
    pub fn of(day: &Day) -> Self {
        day.stops.iter().fold(Self::default(), |mut m, stop| {
            m.total_count += 1;
            m.total_estimated += stop.estimated_cost_sgd;
            if stop.completed {
                m.completed_count += 1;
                m.total_spent += stop.estimated_cost_sgd;
            }
            m
        })
    }

    /// Completed share of stops, 0.0 for an empty day
    pub fn progress(&self) -> f64 {
        if self.total_count == 0 {
            0.0
        } else {
            self.completed_count as f64 / self.total_count as f64
        }
    }

    /// Estimated cost of stops not yet done
    pub fn remaining(&self) -> f64 {
        self.total_estimated - self.total_spent
    }
}

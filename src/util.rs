//! Timing helper for debug output

use std::time::Instant;

/// RAII timer for one solve, logs elapsed time and throughput on drop.
///
/// # Example
/// ```ignore
/// let _t = Timed::debug("Closest pair", points.len());
/// // ... solve ...
/// // logs "Closest pair of 1000 points: 1.234ms (0.001µs per point)" when _t is dropped
/// ```
pub struct Timed {
    name: &'static str,
    points: usize,
    start: Instant,
    level: log::Level,
}

impl Timed {
    /// Create a new timer over `points` points that logs at DEBUG level.
    pub fn debug(name: &'static str, points: usize) -> Self {
        log::trace!("{} of {} points...", name, points);
        Self {
            name,
            points,
            start: Instant::now(),
            level: log::Level::Debug,
        }
    }
}

impl Drop for Timed {
    fn drop(&mut self) {
        let elapsed = self.start.elapsed();
        let per_point = elapsed.as_secs_f64() * 1e6 / self.points.max(1) as f64;
        log::log!(
            self.level,
            "{} of {} points: {:.3?} ({:.3}µs per point)",
            self.name,
            self.points,
            elapsed,
            per_point
        );
    }
}

//! Ephemeral pointer trail ("laser") annotation.
//!
//! Trail points live outside the element list and fade out on their own;
//! they are never committed or persisted. While any point is live the
//! owning surface should schedule repaints at [`REPAINT_INTERVAL`],
//! independent of pointer-move events.

use kurbo::Point;
use std::time::{Duration, Instant};

/// How long a trail point stays visible.
pub const TRAIL_LIFETIME: Duration = Duration::from_secs(1);

/// Repaint cadence while the trail is live (roughly 30 Hz).
pub const REPAINT_INTERVAL: Duration = Duration::from_millis(33);

/// One captured pointer position with its capture instant.
#[derive(Debug, Clone, Copy)]
pub struct TrailPoint {
    pub position: Point,
    pub captured_at: Instant,
}

impl TrailPoint {
    /// Remaining visibility in `[0, 1]`, decaying linearly with age.
    pub fn alpha(&self, now: Instant) -> f64 {
        let age = now.saturating_duration_since(self.captured_at).as_secs_f64();
        (1.0 - age / TRAIL_LIFETIME.as_secs_f64()).max(0.0)
    }
}

/// Short-lived sequence of pointer positions.
#[derive(Debug, Clone)]
pub struct PointerTrail {
    points: Vec<TrailPoint>,
}

impl PointerTrail {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Capture a position now.
    pub fn push(&mut self, position: Point) {
        self.push_at(position, Instant::now());
    }

    /// Capture a position with an explicit instant.
    pub fn push_at(&mut self, position: Point, at: Instant) {
        self.points.push(TrailPoint {
            position,
            captured_at: at,
        });
    }

    /// Drop every point older than the trail lifetime.
    pub fn prune(&mut self, now: Instant) {
        self.points
            .retain(|point| now.saturating_duration_since(point.captured_at) <= TRAIL_LIFETIME);
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn points(&self) -> &[TrailPoint] {
        &self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the owner should keep scheduling repaints.
    pub fn needs_repaint(&self) -> bool {
        !self.points.is_empty()
    }
}

impl Default for PointerTrail {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alpha_decays_linearly() {
        let at = Instant::now();
        let point = TrailPoint {
            position: Point::ZERO,
            captured_at: at,
        };
        assert!((point.alpha(at) - 1.0).abs() < 1e-9);

        let half = point.alpha(at + Duration::from_millis(500));
        assert!((half - 0.5).abs() < 0.01);

        assert_eq!(point.alpha(at + Duration::from_secs(2)), 0.0);
    }

    #[test]
    fn test_prune_drops_expired_points() {
        let mut trail = PointerTrail::new();
        let start = Instant::now();
        trail.push_at(Point::new(0.0, 0.0), start);
        trail.push_at(Point::new(5.0, 5.0), start + Duration::from_millis(800));

        trail.prune(start + Duration::from_millis(1100));
        assert_eq!(trail.len(), 1);

        trail.prune(start + Duration::from_secs(3));
        assert!(trail.is_empty());
        assert!(!trail.needs_repaint());
    }

    #[test]
    fn test_repaint_interval_is_about_30hz() {
        let hz = 1.0 / REPAINT_INTERVAL.as_secs_f64();
        assert!(hz > 28.0 && hz < 32.0);
    }
}

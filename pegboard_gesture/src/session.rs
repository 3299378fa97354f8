// Copyright 2026 the Pegboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-gesture drag state: positions, kinematics, and snap feedback.

use kurbo::{Point, Vec2};
use pegboard_collision::Collision;
use pegboard_snap::zones::SnapZone;
use smallvec::SmallVec;

/// One observed pointer sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    /// Pointer position in viewport pixels.
    pub position: Point,
    /// Caller-supplied timestamp in milliseconds.
    pub timestamp: u64,
}

/// The snap target currently attracting a dragged item.
///
/// Captured at detection time: `at` is the resolved pixel destination, so
/// release handling never has to re-query the snapshot that produced it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SnapTarget<K> {
    /// Magnetic attraction to a placed item.
    Item {
        /// The attracting item.
        id: K,
        /// Its projected cell center in pixels.
        at: Point,
        /// Attraction strength in `[0, 1]`, linear in distance.
        strength: f64,
    },
    /// A named zone previewed from edge proximity.
    Zone {
        /// The previewed region.
        zone: SnapZone,
        /// The center of the region's placement bounds in pixels.
        at: Point,
        /// Always `1.0`: edge proximity is a deliberate gesture.
        strength: f64,
    },
}

impl<K> SnapTarget<K> {
    /// The resolved snap destination in pixels.
    #[must_use]
    pub fn at(&self) -> Point {
        match self {
            Self::Item { at, .. } | Self::Zone { at, .. } => *at,
        }
    }

    /// The target's strength in `[0, 1]`.
    #[must_use]
    pub fn strength(&self) -> f64 {
        match self {
            Self::Item { strength, .. } | Self::Zone { strength, .. } => *strength,
        }
    }
}

/// Live state of one drag gesture, from `start` until `end` or `cancel`.
///
/// Owned by the [`SessionRegistry`](crate::SessionRegistry) and handed to
/// callers by shared reference only; all mutation goes through the
/// [`DragTracker`](crate::DragTracker), which is what keeps the history cap
/// and the kinematics invariants intact.
///
/// Velocities are in px/ms and accelerations in px/ms²; both read zero until
/// the second sample arrives.
#[derive(Clone, Debug, PartialEq)]
pub struct DragSession<K> {
    pub(crate) item: K,
    pub(crate) start_position: Point,
    pub(crate) start_time: u64,
    pub(crate) current_position: Point,
    pub(crate) current_time: u64,
    pub(crate) velocity: Vec2,
    pub(crate) acceleration: Vec2,
    pub(crate) momentum: Vec2,
    pub(crate) history: SmallVec<[Sample; 8]>,
    pub(crate) snap: Option<SnapTarget<K>>,
    pub(crate) collision: Option<Collision<K>>,
}

impl<K> DragSession<K> {
    pub(crate) fn new(item: K, position: Point, timestamp: u64) -> Self {
        let mut history = SmallVec::new();
        history.push(Sample {
            position,
            timestamp,
        });
        Self {
            item,
            start_position: position,
            start_time: timestamp,
            current_position: position,
            current_time: timestamp,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            momentum: Vec2::ZERO,
            history,
            snap: None,
            collision: None,
        }
    }

    /// Folds a new sample into the session, returning whether its timestamp
    /// strictly advanced past the previous one.
    ///
    /// When it did not (a reordered or repeated event), velocity,
    /// acceleration, and momentum read zero for the tick but the sample is
    /// still recorded: the position keeps tracking the pointer, and the
    /// stored timestamp mirrors the input so a clock that jumped backwards
    /// resumes producing kinematics as soon as it moves forward again.
    pub(crate) fn advance(
        &mut self,
        position: Point,
        timestamp: u64,
        history_cap: usize,
        momentum_retain: f64,
    ) -> bool {
        let advanced = timestamp > self.current_time;
        if advanced {
            let dt = (timestamp - self.current_time) as f64;
            let velocity = (position - self.current_position) / dt;
            self.acceleration = (velocity - self.velocity) / dt;
            self.velocity = velocity;
            self.momentum = velocity * momentum_retain;
        } else {
            self.velocity = Vec2::ZERO;
            self.acceleration = Vec2::ZERO;
            self.momentum = Vec2::ZERO;
        }
        self.current_position = position;
        self.current_time = timestamp;
        let cap = history_cap.max(1);
        while self.history.len() >= cap {
            self.history.remove(0);
        }
        self.history.push(Sample {
            position,
            timestamp,
        });
        advanced
    }

    /// Where the gesture began, in pixels.
    #[must_use]
    pub fn start_position(&self) -> Point {
        self.start_position
    }

    /// Timestamp of the first sample, in milliseconds.
    #[must_use]
    pub fn start_time(&self) -> u64 {
        self.start_time
    }

    /// The most recent pointer position, in pixels.
    #[must_use]
    pub fn position(&self) -> Point {
        self.current_position
    }

    /// Timestamp of the most recent sample, in milliseconds.
    #[must_use]
    pub fn timestamp(&self) -> u64 {
        self.current_time
    }

    /// Velocity over the last tick, in px/ms.
    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Acceleration over the last tick, in px/ms².
    #[must_use]
    pub fn acceleration(&self) -> Vec2 {
        self.acceleration
    }

    /// Decayed velocity carried toward release.
    ///
    /// Always zero while momentum is disabled in the tracker config.
    #[must_use]
    pub fn momentum(&self) -> Vec2 {
        self.momentum
    }

    /// The retained samples, oldest first, never more than the configured
    /// cap.
    #[must_use]
    pub fn history(&self) -> &[Sample] {
        &self.history
    }

    /// Cumulative offset from the start position, in pixels.
    #[must_use]
    pub fn total_offset(&self) -> Vec2 {
        self.current_position - self.start_position
    }

    /// Magnitude of the current velocity, in px/ms.
    #[must_use]
    pub fn speed(&self) -> f64 {
        self.velocity.hypot()
    }

    /// Elapsed time since the first sample, in milliseconds.
    ///
    /// Saturates at zero if the most recent timestamp regressed below the
    /// start time.
    #[must_use]
    pub fn duration(&self) -> u64 {
        self.current_time.saturating_sub(self.start_time)
    }
}

impl<K: Copy> DragSession<K> {
    /// The dragged item's identifier.
    #[must_use]
    pub fn item(&self) -> K {
        self.item
    }

    /// The snap target from the most recent update, if any qualified.
    #[must_use]
    pub fn snap(&self) -> Option<SnapTarget<K>> {
        self.snap
    }

    /// The collision from the most recent update, if any item was in radius.
    #[must_use]
    pub fn collision(&self) -> Option<Collision<K>> {
        self.collision
    }
}

#[cfg(test)]
mod tests {
    extern crate alloc;

    use alloc::vec::Vec;

    use super::*;

    #[test]
    fn new_session_starts_at_rest() {
        let session = DragSession::new(1_u32, Point::new(100.0, 200.0), 1000);
        assert_eq!(session.item(), 1);
        assert_eq!(session.start_position(), Point::new(100.0, 200.0));
        assert_eq!(session.position(), Point::new(100.0, 200.0));
        assert_eq!(session.velocity(), Vec2::ZERO);
        assert_eq!(session.acceleration(), Vec2::ZERO);
        assert_eq!(session.momentum(), Vec2::ZERO);
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.total_offset(), Vec2::ZERO);
        assert_eq!(session.duration(), 0);
        assert_eq!(session.snap(), None);
        assert_eq!(session.collision(), None);
    }

    #[test]
    fn velocity_is_delta_position_over_delta_time() {
        let mut session = DragSession::new(1_u32, Point::new(100.0, 100.0), 1000);

        assert!(session.advance(Point::new(150.0, 125.0), 1100, 32, 0.0));
        assert_eq!(session.velocity(), Vec2::new(0.5, 0.25));
        assert_eq!(session.acceleration(), Vec2::new(0.005, 0.0025));

        assert!(session.advance(Point::new(250.0, 150.0), 1200, 32, 0.0));
        assert_eq!(session.velocity(), Vec2::new(1.0, 0.25));
        assert_eq!(session.acceleration(), Vec2::new(0.005, 0.0));
    }

    #[test]
    fn speed_is_velocity_magnitude() {
        let mut session = DragSession::new(1_u32, Point::new(0.0, 0.0), 0);
        session.advance(Point::new(3.0, 4.0), 1, 32, 0.0);
        assert_eq!(session.velocity(), Vec2::new(3.0, 4.0));
        assert!((session.speed() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn non_increasing_timestamp_zeroes_the_tick_but_keeps_the_sample() {
        let mut session = DragSession::new(1_u32, Point::new(0.0, 0.0), 1000);
        session.advance(Point::new(10.0, 0.0), 1100, 32, 0.0);
        assert_eq!(session.velocity(), Vec2::new(0.1, 0.0));

        // Same timestamp: degenerate, but the position still tracks.
        assert!(!session.advance(Point::new(20.0, 0.0), 1100, 32, 0.0));
        assert_eq!(session.velocity(), Vec2::ZERO);
        assert_eq!(session.acceleration(), Vec2::ZERO);
        assert_eq!(session.position(), Point::new(20.0, 0.0));
        assert_eq!(session.history().len(), 3);
    }

    #[test]
    fn kinematics_resume_after_a_clock_regression() {
        let mut session = DragSession::new(1_u32, Point::new(0.0, 0.0), 1000);
        assert!(!session.advance(Point::new(5.0, 0.0), 900, 32, 0.0));
        assert_eq!(session.timestamp(), 900);

        // The clock moves forward again relative to the recorded sample.
        assert!(session.advance(Point::new(15.0, 0.0), 950, 32, 0.0));
        assert_eq!(session.velocity(), Vec2::new(0.2, 0.0));
    }

    #[test]
    fn history_evicts_oldest_beyond_the_cap() {
        let mut session = DragSession::new(1_u32, Point::new(0.0, 0.0), 0);
        for i in 1..=6_u64 {
            session.advance(Point::new(i as f64, 0.0), i * 10, 4, 0.0);
        }
        let timestamps: Vec<u64> = session.history().iter().map(|s| s.timestamp).collect();
        assert_eq!(timestamps, [30, 40, 50, 60]);
    }

    #[test]
    fn history_cap_of_one_keeps_only_the_latest_sample() {
        let mut session = DragSession::new(1_u32, Point::new(0.0, 0.0), 0);
        session.advance(Point::new(1.0, 0.0), 10, 1, 0.0);
        session.advance(Point::new(2.0, 0.0), 20, 1, 0.0);
        assert_eq!(
            session.history(),
            [Sample {
                position: Point::new(2.0, 0.0),
                timestamp: 20
            }]
        );
    }

    #[test]
    fn momentum_retains_the_configured_share_of_velocity() {
        let mut session = DragSession::new(1_u32, Point::new(0.0, 0.0), 0);
        session.advance(Point::new(100.0, 0.0), 100, 32, 0.25);
        assert_eq!(session.velocity(), Vec2::new(1.0, 0.0));
        assert_eq!(session.momentum(), Vec2::new(0.25, 0.0));

        // Retain share of zero models momentum disabled.
        session.advance(Point::new(200.0, 0.0), 200, 32, 0.0);
        assert_eq!(session.momentum(), Vec2::ZERO);
    }

    #[test]
    fn total_offset_and_duration_span_the_whole_gesture() {
        let mut session = DragSession::new(1_u32, Point::new(10.0, 20.0), 1000);
        session.advance(Point::new(15.0, 25.0), 1100, 32, 0.0);
        session.advance(Point::new(20.0, 35.0), 1250, 32, 0.0);
        assert_eq!(session.total_offset(), Vec2::new(10.0, 15.0));
        assert_eq!(session.duration(), 250);
    }

    #[test]
    fn snap_target_accessors_cover_both_flavors() {
        let item: SnapTarget<u32> = SnapTarget::Item {
            id: 7,
            at: Point::new(25.0, 25.0),
            strength: 0.75,
        };
        assert_eq!(item.at(), Point::new(25.0, 25.0));
        assert_eq!(item.strength(), 0.75);

        let zone: SnapTarget<u32> = SnapTarget::Zone {
            zone: SnapZone::Maximize,
            at: Point::new(600.0, 400.0),
            strength: 1.0,
        };
        assert_eq!(zone.at(), Point::new(600.0, 400.0));
        assert_eq!(zone.strength(), 1.0);
    }
}

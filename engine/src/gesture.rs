//! Swipe gesture tracking.
//!
//! A touch sequence is tracked from start to end. Only the horizontal
//! coordinate matters; the completed gesture is handed to the reducer and
//! then dropped.

use serde::{Deserialize, Serialize};

/// Default minimum horizontal travel, in pixels, for a touch to count as a swipe.
pub const DEFAULT_SWIPE_THRESHOLD_PX: f64 = 50.0;

/// A completed (or in-flight) horizontal swipe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwipeGesture {
    /// `clientX` at touch start
    pub start_x: f64,
    /// Last observed `clientX`
    pub end_x: f64,
}

/// Direction of a swipe that cleared the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeDirection {
    /// Finger moved towards smaller x; advances the carousel
    Left,
    /// Finger moved towards larger x; goes back
    Right,
}

impl SwipeGesture {
    pub fn new(start_x: f64, end_x: f64) -> Self {
        Self { start_x, end_x }
    }

    /// Signed travel, positive when the finger moved left.
    #[inline]
    pub fn distance(&self) -> f64 {
        self.start_x - self.end_x
    }

    /// Classify against `threshold`. Travel must strictly exceed it.
    pub fn direction(&self, threshold: f64) -> Option<SwipeDirection> {
        let distance = self.distance();
        if distance > threshold {
            Some(SwipeDirection::Left)
        } else if distance < -threshold {
            Some(SwipeDirection::Right)
        } else {
            None
        }
    }
}

/// Tracker state.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum GestureState {
    /// No touch in progress
    #[default]
    Idle,
    /// Touch started and not yet released
    Tracking {
        start_x: f64,
        /// `None` until the first move event
        end_x: Option<f64>,
    },
}

/// IDLE/TRACKING state machine for one touch surface.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GestureTracker {
    state: GestureState,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    #[inline]
    pub fn is_tracking(&self) -> bool {
        matches!(self.state, GestureState::Tracking { .. })
    }

    /// Touch start. Restarts tracking if a gesture was already in flight.
    pub fn start(&mut self, x: f64) {
        self.state = GestureState::Tracking {
            start_x: x,
            end_x: None,
        };
    }

    /// Touch move. Ignored while idle.
    pub fn move_to(&mut self, x: f64) {
        if let GestureState::Tracking { end_x, .. } = &mut self.state {
            *end_x = Some(x);
        }
    }

    /// Touch end. Returns to idle and yields the gesture, unless the touch
    /// never moved (a tap) or nothing was being tracked.
    pub fn end(&mut self) -> Option<SwipeGesture> {
        match std::mem::take(&mut self.state) {
            GestureState::Tracking {
                start_x,
                end_x: Some(end_x),
            } => Some(SwipeGesture::new(start_x, end_x)),
            _ => None,
        }
    }

    /// Drop any in-flight gesture, e.g. on `touchcancel`.
    pub fn cancel(&mut self) {
        self.state = GestureState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_thresholds() {
        let threshold = DEFAULT_SWIPE_THRESHOLD_PX;
        assert_eq!(
            SwipeGesture::new(200.0, 100.0).direction(threshold),
            Some(SwipeDirection::Left)
        );
        assert_eq!(
            SwipeGesture::new(100.0, 200.0).direction(threshold),
            Some(SwipeDirection::Right)
        );
        assert_eq!(SwipeGesture::new(100.0, 80.0).direction(threshold), None);
        // exactly at the threshold is not a swipe
        assert_eq!(SwipeGesture::new(150.0, 100.0).direction(threshold), None);
        assert_eq!(SwipeGesture::new(100.0, 150.0).direction(threshold), None);
    }

    #[test]
    fn tracker_full_cycle() {
        let mut tracker = GestureTracker::new();
        assert!(!tracker.is_tracking());

        tracker.start(300.0);
        assert!(tracker.is_tracking());
        tracker.move_to(260.0);
        tracker.move_to(120.0);

        let gesture = tracker.end().unwrap();
        assert_eq!(gesture, SwipeGesture::new(300.0, 120.0));
        assert_eq!(tracker.state(), GestureState::Idle);
    }

    #[test]
    fn tap_without_move_yields_nothing() {
        let mut tracker = GestureTracker::new();
        tracker.start(42.0);
        assert_eq!(tracker.end(), None);
        assert!(!tracker.is_tracking());
    }

    #[test]
    fn move_and_end_while_idle_are_ignored() {
        let mut tracker = GestureTracker::new();
        tracker.move_to(10.0);
        assert_eq!(tracker.state(), GestureState::Idle);
        assert_eq!(tracker.end(), None);
    }

    #[test]
    fn previous_gesture_does_not_leak() {
        let mut tracker = GestureTracker::new();
        tracker.start(300.0);
        tracker.move_to(100.0);
        tracker.end();

        // a second touch that never moves must not reuse the old end point
        tracker.start(300.0);
        assert_eq!(tracker.end(), None);
    }

    #[test]
    fn restart_discards_in_flight_gesture() {
        let mut tracker = GestureTracker::new();
        tracker.start(300.0);
        tracker.move_to(100.0);
        tracker.start(50.0);
        tracker.move_to(60.0);
        assert_eq!(tracker.end(), Some(SwipeGesture::new(50.0, 60.0)));
    }

    #[test]
    fn cancel_returns_to_idle() {
        let mut tracker = GestureTracker::new();
        tracker.start(300.0);
        tracker.move_to(100.0);
        tracker.cancel();
        assert_eq!(tracker.end(), None);
    }

    #[test]
    fn serialization_format() {
        let json = serde_json::to_string(&SwipeGesture::new(1.0, 2.0)).unwrap();
        assert!(json.contains("startX"));
        assert!(json.contains("endX"));

        let state = GestureState::Tracking {
            start_x: 1.0,
            end_x: None,
        };
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, r#"{"state":"tracking","startX":1.0,"endX":null}"#);

        let json = serde_json::to_string(&GestureState::Idle).unwrap();
        assert_eq!(json, r#"{"state":"idle"}"#);
    }
}

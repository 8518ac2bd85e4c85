//! Pointer activation sensor
//!
//! A press only becomes a drag once the pointer has travelled further than the
//! activation distance from where it went down. Releasing before that is a
//! click, so clicking a title to edit it never starts a drag.

use super::event::DragEvent;
use crate::config::DEFAULT_ACTIVATION_DISTANCE;
use crate::types::DragRef;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// A pointer position in host coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// How a press ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Release {
    /// No press was in progress
    Nothing,
    /// The pointer never travelled far enough: treat as a click on the target
    Click(DragRef),
    /// A drag of the given entity was in progress; the host should end it
    Drag(DragRef),
}

#[derive(Debug, Clone)]
struct Pending {
    target: DragRef,
    origin: Point,
}

/// Turns raw pointer samples into drag starts
#[derive(Debug, Clone)]
pub struct PointerSensor {
    activation_distance: f64,
    pending: Option<Pending>,
    active: Option<DragRef>,
}

impl Default for PointerSensor {
    fn default() -> Self {
        Self::new(DEFAULT_ACTIVATION_DISTANCE)
    }
}

impl PointerSensor {
    pub fn new(activation_distance: f64) -> Self {
        Self {
            activation_distance,
            pending: None,
            active: None,
        }
    }

    pub fn activation_distance(&self) -> f64 {
        self.activation_distance
    }

    /// The entity currently being dragged, once activated
    pub fn active(&self) -> Option<&DragRef> {
        self.active.as_ref()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Pointer went down on a draggable entity. Any earlier gesture is dropped.
    pub fn press(&mut self, target: DragRef, at: Point) {
        self.active = None;
        self.pending = Some(Pending { target, origin: at });
    }

    /// Pointer moved. Returns a start event the first time the press travels
    /// strictly further than the activation distance.
    pub fn motion(&mut self, at: Point) -> Option<DragEvent> {
        let pending = self.pending.as_ref()?;
        let travelled = pending.origin.distance_to(at);
        if travelled <= self.activation_distance {
            return None;
        }

        let target = self.pending.take()?.target;
        trace!(entity = %target, travelled, "pointer sensor activated");
        self.active = Some(target.clone());
        Some(DragEvent::start(target))
    }

    /// Pointer went up
    pub fn release(&mut self) -> Release {
        if let Some(active) = self.active.take() {
            self.pending = None;
            return Release::Drag(active);
        }
        match self.pending.take() {
            Some(pending) => Release::Click(pending.target),
            None => Release::Nothing,
        }
    }

    /// Forget the gesture, returning the entity that was being dragged
    pub fn reset(&mut self) -> Option<DragRef> {
        self.pending = None;
        self.active.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_travel_is_click() {
        let mut sensor = PointerSensor::new(30.0);
        sensor.press(DragRef::item("t1"), Point::new(0.0, 0.0));
        assert!(sensor.motion(Point::new(10.0, 10.0)).is_none());
        assert_eq!(sensor.release(), Release::Click(DragRef::item("t1")));
    }

    #[test]
    fn test_exact_threshold_does_not_activate() {
        let mut sensor = PointerSensor::new(30.0);
        sensor.press(DragRef::item("t1"), Point::new(0.0, 0.0));
        assert!(sensor.motion(Point::new(18.0, 24.0)).is_none());
        assert!(sensor.is_pending());
    }

    #[test]
    fn test_activation_emits_start_once() {
        let mut sensor = PointerSensor::new(30.0);
        sensor.press(DragRef::group("g1"), Point::new(100.0, 100.0));
        let event = sensor.motion(Point::new(100.0, 131.0));
        assert_eq!(event, Some(DragEvent::start(DragRef::group("g1"))));
        assert!(sensor.motion(Point::new(100.0, 200.0)).is_none());
        assert_eq!(sensor.active(), Some(&DragRef::group("g1")));
        assert_eq!(sensor.release(), Release::Drag(DragRef::group("g1")));
        assert_eq!(sensor.release(), Release::Nothing);
    }

    #[test]
    fn test_motion_without_press() {
        let mut sensor = PointerSensor::default();
        assert!(sensor.motion(Point::new(500.0, 500.0)).is_none());
        assert_eq!(sensor.activation_distance(), 30.0);
    }

    #[test]
    fn test_reset() {
        let mut sensor = PointerSensor::new(0.0);
        sensor.press(DragRef::item("t1"), Point::default());
        sensor.motion(Point::new(1.0, 0.0));
        assert_eq!(sensor.reset(), Some(DragRef::item("t1")));
        assert_eq!(sensor.release(), Release::Nothing);
    }
}

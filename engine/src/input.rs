//! Raw input normalization.
//!
//! Hosts forward button clicks, key presses, indicator clicks and touch
//! coordinates here. The controller turns them into reducer transitions and
//! keeps the gesture tracker in step.

use crate::{
    carousel::{Carousel, CarouselConfig, Command, Transition},
    error::Result,
    gesture::{GestureState, GestureTracker},
};
use serde::{Deserialize, Serialize};

/// Keys the carousel reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value. Unrelated keys map to `None`.
    pub fn from_dom_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Key::ArrowLeft),
            "ArrowRight" => Some(Key::ArrowRight),
            _ => None,
        }
    }

    /// The reducer command this key triggers.
    pub fn command(self) -> Command {
        match self {
            Key::ArrowLeft => Command::Previous,
            Key::ArrowRight => Command::Next,
        }
    }
}

/// An input event as delivered by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum InputEvent {
    NextClicked,
    PreviousClicked,
    IndicatorClicked { index: usize },
    /// `key` carries the DOM `KeyboardEvent.key` string
    KeyDown { key: String },
    TouchStart { x: f64 },
    TouchMove { x: f64 },
    TouchEnd,
    TouchCancel,
}

/// Snapshot of a controller for hosts that poll.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ControllerState {
    pub current_index: usize,
    pub total_items: usize,
    /// A touch is in progress
    pub tracking: bool,
    pub gesture: GestureState,
}

/// Carousel plus gesture tracker; the single writer of the current index.
#[derive(Debug, Clone)]
pub struct InputController {
    carousel: Carousel,
    gesture: GestureTracker,
}

impl InputController {
    pub fn new(total_items: usize, config: CarouselConfig) -> Result<Self> {
        Ok(Self::from_carousel(Carousel::new(total_items, config)?))
    }

    pub fn from_carousel(carousel: Carousel) -> Self {
        Self {
            carousel,
            gesture: GestureTracker::new(),
        }
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn gesture(&self) -> &GestureTracker {
        &self.gesture
    }

    pub fn current_index(&self) -> usize {
        self.carousel.current_index()
    }

    pub fn state(&self) -> ControllerState {
        ControllerState {
            current_index: self.carousel.current_index(),
            total_items: self.carousel.total_items(),
            tracking: self.gesture.is_tracking(),
            gesture: self.gesture.state(),
        }
    }

    /// Apply a discrete command directly, bypassing event normalization.
    pub fn apply(&mut self, command: Command) -> Result<Transition> {
        self.carousel.apply(command)
    }

    /// Handle one host event. Events that do not move the carousel return a
    /// no-op transition; only an out-of-range indicator click fails.
    pub fn dispatch(&mut self, event: InputEvent) -> Result<Transition> {
        let idle = Transition::noop(self.carousel.current_index());
        match event {
            InputEvent::NextClicked => Ok(self.carousel.next()),
            InputEvent::PreviousClicked => Ok(self.carousel.previous()),
            InputEvent::IndicatorClicked { index } => self.carousel.jump_to(index),
            InputEvent::KeyDown { key } => match Key::from_dom_key(&key) {
                Some(key) => self.carousel.apply(key.command()),
                None => Ok(idle),
            },
            InputEvent::TouchStart { x } => {
                self.gesture.start(x);
                Ok(idle)
            }
            InputEvent::TouchMove { x } => {
                self.gesture.move_to(x);
                Ok(idle)
            }
            InputEvent::TouchEnd => match self.gesture.end() {
                Some(gesture) => Ok(self.carousel.resolve_swipe(gesture)),
                None => Ok(idle),
            },
            InputEvent::TouchCancel => {
                self.gesture.cancel();
                Ok(idle)
            }
        }
    }
}

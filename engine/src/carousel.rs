//! Carousel - the input reducer.
//!
//! The Carousel owns the centered index and is its only mutator. Every
//! transition wraps modulo the item count and reports what changed.

use crate::{
    error::Result,
    gesture::{SwipeDirection, SwipeGesture, DEFAULT_SWIPE_THRESHOLD_PX},
    position::{self, check_index, check_total, PositionDescriptor},
    Error,
};
use serde::{Deserialize, Serialize};

/// Tunable options for a carousel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CarouselConfig {
    /// Minimum horizontal travel for a touch to count as a swipe
    pub swipe_threshold_px: f64,
    /// Index centered at construction; mid-sequence when absent
    pub initial_index: Option<usize>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            swipe_threshold_px: DEFAULT_SWIPE_THRESHOLD_PX,
            initial_index: None,
        }
    }
}

impl CarouselConfig {
    pub fn with_swipe_threshold(mut self, px: f64) -> Self {
        self.swipe_threshold_px = px;
        self
    }

    pub fn with_initial_index(mut self, index: usize) -> Self {
        self.initial_index = Some(index);
        self
    }

    fn validate(&self, total_items: usize) -> Result<()> {
        if !self.swipe_threshold_px.is_finite() || self.swipe_threshold_px < 0.0 {
            return Err(Error::InvalidArgument(format!(
                "swipe_threshold_px must be a finite, non-negative number, got {}",
                self.swipe_threshold_px
            )));
        }
        if let Some(index) = self.initial_index {
            check_index("initial_index", index, total_items)?;
        }
        Ok(())
    }
}

/// A discrete reducer command.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Command {
    Next,
    Previous,
    JumpTo { index: usize },
    Swipe(SwipeGesture),
}

/// The index before and after a reducer step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transition {
    pub from: usize,
    pub to: usize,
}

impl Transition {
    /// A step that left the index where it was.
    pub fn noop(index: usize) -> Self {
        Self {
            from: index,
            to: index,
        }
    }

    /// True if the centered item changed.
    pub fn moved(&self) -> bool {
        self.from != self.to
    }
}

/// Owned carousel state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Carousel {
    current_index: usize,
    total_items: usize,
    config: CarouselConfig,
}

impl Carousel {
    /// Create a carousel over `total_items` items.
    ///
    /// Fails with [`Error::InvalidArgument`] for an empty carousel or an
    /// invalid config.
    pub fn new(total_items: usize, config: CarouselConfig) -> Result<Self> {
        check_total(total_items)?;
        config.validate(total_items)?;

        let current_index = config.initial_index.unwrap_or(total_items / 2);
        Ok(Self {
            current_index,
            total_items,
            config,
        })
    }

    /// Create a carousel with default options.
    pub fn with_items(total_items: usize) -> Result<Self> {
        Self::new(total_items, CarouselConfig::default())
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn swipe_threshold(&self) -> f64 {
        self.config.swipe_threshold_px
    }

    fn set(&mut self, to: usize) -> Transition {
        let from = self.current_index;
        self.current_index = to;
        Transition { from, to }
    }

    /// Advance by one, wrapping to the first item.
    pub fn next(&mut self) -> Transition {
        self.set((self.current_index + 1) % self.total_items)
    }

    /// Go back by one, wrapping to the last item.
    pub fn previous(&mut self) -> Transition {
        self.set((self.current_index + self.total_items - 1) % self.total_items)
    }

    /// Center `target`. Out-of-range targets are rejected and the index is
    /// left untouched.
    pub fn jump_to(&mut self, target: usize) -> Result<Transition> {
        check_index("target", target, self.total_items)?;
        Ok(self.set(target))
    }

    /// Turn a completed swipe into at most one step.
    pub fn resolve_swipe(&mut self, gesture: SwipeGesture) -> Transition {
        match gesture.direction(self.config.swipe_threshold_px) {
            Some(SwipeDirection::Left) => self.next(),
            Some(SwipeDirection::Right) => self.previous(),
            None => Transition::noop(self.current_index),
        }
    }

    /// Apply a serialized command.
    pub fn apply(&mut self, command: Command) -> Result<Transition> {
        match command {
            Command::Next => Ok(self.next()),
            Command::Previous => Ok(self.previous()),
            Command::JumpTo { index } => self.jump_to(index),
            Command::Swipe(gesture) => Ok(self.resolve_swipe(gesture)),
        }
    }

    /// Descriptor for a single item at the current index.
    pub fn position_of(&self, item_index: usize) -> Result<PositionDescriptor> {
        position::compute_position(item_index, self.current_index, self.total_items)
    }

    /// Descriptors for every item, in index order.
    pub fn frame(&self) -> Vec<PositionDescriptor> {
        position::frame_unchecked(self.current_index, self.total_items)
    }

    /// Indicator-dot state, `true` for the centered item.
    pub fn indicators(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.total_items).map(move |i| i == self.current_index)
    }
}

//! # Folio Engine
//!
//! The carousel core of the Folio portfolio site.
//!
//! This crate computes where every project card sits in a circular carousel
//! and owns the centered index, updating it from button clicks, arrow keys,
//! indicator dots and swipe gestures. It has no knowledge of how anything is
//! drawn; a host polls the state after each transition and renders.
//!
//! ## Design Principles
//!
//! - **No IO**: Engine has no knowledge of files, network, or platform
//! - **Deterministic**: Same inputs always produce same outputs
//! - **Single writer**: Only the reducer mutates the current index
//! - **Portable**: Runs anywhere Rust runs (native, WASM, behind the C ABI)
//!
//! ## Core Concepts
//!
//! ### Positions
//!
//! [`compute_position`] maps `(item_index, current_index, total_items)` to a
//! [`PositionDescriptor`] using the forward circular distance between the two
//! indices. Each item lands in one of five [`Offset`] slots:
//! center, near left/right, or far (hidden) left/right.
//!
//! ### Reducer
//!
//! [`Carousel`] holds the current index and exposes `next`, `previous`,
//! `jump_to` and `resolve_swipe`. All transitions wrap modulo the item count
//! and report a [`Transition`].
//!
//! ### Input
//!
//! [`InputController`] pairs a carousel with a [`GestureTracker`] and accepts
//! raw [`InputEvent`]s from the host.
//!
//! ## Quick Start
//!
//! ```rust
//! use folio_engine::{CarouselConfig, InputController, InputEvent, Offset};
//!
//! let mut controller = InputController::new(5, CarouselConfig::default()).unwrap();
//! assert_eq!(controller.current_index(), 2);
//!
//! // A left swipe of 100px advances by one
//! controller.dispatch(InputEvent::TouchStart { x: 200.0 }).unwrap();
//! controller.dispatch(InputEvent::TouchMove { x: 100.0 }).unwrap();
//! let transition = controller.dispatch(InputEvent::TouchEnd).unwrap();
//! assert_eq!((transition.from, transition.to), (2, 3));
//!
//! let frame = controller.carousel().frame();
//! assert_eq!(frame[3].offset, Offset::Center);
//! assert_eq!(frame[2].offset, Offset::NearLeft);
//! ```
//!
//! ## FFI
//!
//! The [`ffi`] module provides C-compatible functions for use from other
//! languages. All data is exchanged as JSON strings.

pub mod carousel;
pub mod catalog;
pub mod contact;
pub mod error;
pub mod ffi;
pub mod gesture;
pub mod input;
pub mod position;
pub mod showcase;

// Re-export main types at crate root
pub use carousel::{Carousel, CarouselConfig, Command, Transition};
pub use catalog::{Portfolio, Project, Skill, SkillCategory, MAX_SKILL_LEVEL};
pub use contact::ContactMessage;
pub use error::Error;
pub use gesture::{
    GestureState, GestureTracker, SwipeDirection, SwipeGesture, DEFAULT_SWIPE_THRESHOLD_PX,
};
pub use input::{ControllerState, InputController, InputEvent, Key};
pub use position::{compute_position, frame, Offset, PositionDescriptor};
pub use showcase::{Placed, Showcase};

/// Engine crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

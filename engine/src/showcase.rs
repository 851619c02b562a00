//! Showcase - a carousel bound to its items.
//!
//! Item content is opaque to the engine. The showcase keeps the caller's
//! sequence in order and pairs each entry with its descriptor for a render pass.

use crate::{
    carousel::{Carousel, CarouselConfig, Transition},
    error::Result,
    input::{InputController, InputEvent},
    position::PositionDescriptor,
};

/// One entry of a rendered frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placed<'a, T> {
    pub index: usize,
    pub item: &'a T,
    pub position: PositionDescriptor,
}

/// An ordered, fixed-size item sequence with its input controller.
#[derive(Debug, Clone)]
pub struct Showcase<T> {
    items: Vec<T>,
    controller: InputController,
}

impl<T> Showcase<T> {
    /// Wrap `items`. Fails with `InvalidArgument` when `items` is empty.
    pub fn new(items: Vec<T>, config: CarouselConfig) -> Result<Self> {
        let controller = InputController::new(items.len(), config)?;
        Ok(Self { items, controller })
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false; a showcase cannot be built empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn carousel(&self) -> &Carousel {
        self.controller.carousel()
    }

    pub fn controller(&self) -> &InputController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut InputController {
        &mut self.controller
    }

    /// The centered item.
    pub fn current(&self) -> &T {
        &self.items[self.controller.current_index()]
    }

    /// Forward a host event to the controller.
    pub fn dispatch(&mut self, event: InputEvent) -> Result<Transition> {
        self.controller.dispatch(event)
    }

    /// Every item with its descriptor, in item order.
    pub fn frame(&self) -> impl Iterator<Item = Placed<'_, T>> + '_ {
        self.items
            .iter()
            .zip(self.controller.carousel().frame())
            .enumerate()
            .map(|(index, (item, position))| Placed {
                index,
                item,
                position,
            })
    }
}

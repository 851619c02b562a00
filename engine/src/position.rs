//! Carousel position engine.
//!
//! Maps an item's index, the centered index, and the item count to the visual
//! slot the item occupies. Everything here is a pure function of its inputs.

use crate::{error::Result, Error};
use serde::{Deserialize, Serialize};

/// Horizontal shift of the near neighbours, in rem.
pub const NEAR_TRANSLATE_REM: f32 = 16.0;

/// Horizontal shift of hidden items, in rem.
pub const FAR_TRANSLATE_REM: f32 = 24.0;

/// The visual slot an item occupies relative to the centered item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Offset {
    Center,
    NearLeft,
    NearRight,
    FarLeft,
    FarRight,
}

impl Offset {
    /// Classify a circular distance `diff` in a carousel of `total_items`.
    ///
    /// `diff` must already be reduced into `[0, total_items)`.
    pub(crate) fn from_diff(diff: usize, total_items: usize) -> Self {
        debug_assert!(diff < total_items);
        if diff == 0 {
            Offset::Center
        } else if diff == 1 {
            Offset::NearRight
        } else if diff == total_items - 1 {
            Offset::NearLeft
        } else if diff > total_items - diff {
            // diff > total_items / 2 without the float; the exact midpoint of an
            // even-sized carousel stays on the right.
            Offset::FarLeft
        } else {
            Offset::FarRight
        }
    }

    /// Horizontal translation in rem.
    pub fn translate_x(self) -> f32 {
        match self {
            Offset::Center => 0.0,
            Offset::NearLeft => -NEAR_TRANSLATE_REM,
            Offset::NearRight => NEAR_TRANSLATE_REM,
            Offset::FarLeft => -FAR_TRANSLATE_REM,
            Offset::FarRight => FAR_TRANSLATE_REM,
        }
    }

    pub fn scale(self) -> f32 {
        match self {
            Offset::Center => 1.1,
            Offset::NearLeft | Offset::NearRight => 0.75,
            Offset::FarLeft | Offset::FarRight => 0.5,
        }
    }

    pub fn opacity(self) -> f32 {
        match self {
            Offset::Center => 1.0,
            Offset::NearLeft | Offset::NearRight => 0.6,
            Offset::FarLeft | Offset::FarRight => 0.0,
        }
    }

    pub fn stack_order(self) -> i32 {
        match self {
            Offset::Center => 10,
            Offset::NearLeft | Offset::NearRight => 5,
            Offset::FarLeft | Offset::FarRight => 0,
        }
    }

    /// The same slot on the opposite side of the center.
    pub fn mirrored(self) -> Self {
        match self {
            Offset::Center => Offset::Center,
            Offset::NearLeft => Offset::NearRight,
            Offset::NearRight => Offset::NearLeft,
            Offset::FarLeft => Offset::FarRight,
            Offset::FarRight => Offset::FarLeft,
        }
    }

    /// Whether items in this slot are visible at all.
    pub fn is_visible(self) -> bool {
        self.opacity() > 0.0
    }
}

/// Everything a render surface needs to place one item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionDescriptor {
    /// Which slot the item is in
    pub offset: Offset,
    /// Horizontal translation in rem
    pub translate_x: f32,
    /// Uniform scale factor
    pub scale: f32,
    /// Opacity in `[0, 1]`
    pub opacity: f32,
    /// Stacking order; higher draws on top
    pub stack_order: i32,
}

impl PositionDescriptor {
    /// Render as a CSS `transform` value, e.g. `translateX(-16rem) scale(0.75)`.
    pub fn css_transform(&self) -> String {
        if self.translate_x == 0.0 {
            format!("translateX(0) scale({})", self.scale)
        } else {
            format!("translateX({}rem) scale({})", self.translate_x, self.scale)
        }
    }
}

impl From<Offset> for PositionDescriptor {
    fn from(offset: Offset) -> Self {
        Self {
            offset,
            translate_x: offset.translate_x(),
            scale: offset.scale(),
            opacity: offset.opacity(),
            stack_order: offset.stack_order(),
        }
    }
}

/// Forward circular distance from `current_index` to `item_index`.
///
/// Both indices must be below `total_items`.
pub fn circular_diff(item_index: usize, current_index: usize, total_items: usize) -> usize {
    if item_index >= current_index {
        item_index - current_index
    } else {
        total_items - (current_index - item_index)
    }
}

pub(crate) fn check_total(total_items: usize) -> Result<()> {
    if total_items == 0 {
        return Err(Error::InvalidArgument(
            "total_items must be at least 1".to_string(),
        ));
    }
    Ok(())
}

pub(crate) fn check_index(name: &str, index: usize, total_items: usize) -> Result<()> {
    if index >= total_items {
        return Err(Error::out_of_range(name, index, total_items));
    }
    Ok(())
}

/// Compute where `item_index` sits when `current_index` is centered.
///
/// Fails with [`Error::InvalidArgument`] when `total_items` is zero or either
/// index is out of range.
pub fn compute_position(
    item_index: usize,
    current_index: usize,
    total_items: usize,
) -> Result<PositionDescriptor> {
    check_total(total_items)?;
    check_index("item_index", item_index, total_items)?;
    check_index("current_index", current_index, total_items)?;

    let diff = circular_diff(item_index, current_index, total_items);
    Ok(Offset::from_diff(diff, total_items).into())
}

/// Compute descriptors for every item `0..total_items`, in index order.
pub fn frame(current_index: usize, total_items: usize) -> Result<Vec<PositionDescriptor>> {
    check_total(total_items)?;
    check_index("current_index", current_index, total_items)?;

    Ok(frame_unchecked(current_index, total_items))
}

/// [`frame`] for arguments the caller has already validated.
pub(crate) fn frame_unchecked(
    current_index: usize,
    total_items: usize,
) -> Vec<PositionDescriptor> {
    (0..total_items)
        .map(|item| {
            let diff = circular_diff(item, current_index, total_items);
            Offset::from_diff(diff, total_items).into()
        })
        .collect()
}

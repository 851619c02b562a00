//! Request handlers for carousel and contact operations.

mod carousel;
mod contact;

pub use carousel::*;
pub use contact::*;

//! Value types shared by the geometry engine and its bindings.

mod axis;
mod cell;
mod range;
mod scroll;

pub use axis::*;
pub use cell::*;
pub use range::*;
pub use scroll::*;

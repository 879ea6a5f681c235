mod codec;
mod grid;
mod scaling;

pub use codec::*;
pub use grid::*;
pub use scaling::*;

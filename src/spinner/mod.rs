pub mod catalog;
mod types;

pub use types::*;

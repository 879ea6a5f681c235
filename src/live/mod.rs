mod color;
mod renderer;
mod sink;

pub use color::{Color, RESET};
pub use renderer::{
    CLEAR_LINE, CURSOR_UP, HIDE_CURSOR, LiveSpinner, RenderState, SHOW_CURSOR, SpinnerGuard,
};
pub use sink::{Forced, Sink};

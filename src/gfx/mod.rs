//! Graphics and rendering library.

pub mod curses;
pub mod frame;
pub mod texel;

pub use curses::Curses;
pub use frame::FrameBuffer;

//! Canvas coordinate mapping for a windowed 2D renderer: reconciles a
//! logical canvas with the window's pixel size and derives the projection
//! matrices, pointer-coordinate conversions, model pose and clip rect the
//! render loop consumes each frame.

pub mod canvas;
pub mod clock;
pub mod mapping;
pub mod pose;
pub mod projection;
pub mod scissor;
pub mod view;

pub use canvas::{CanvasMode, CanvasRect};
pub use clock::FrameClock;
pub use mapping::WindowToCanvasFactors;
pub use pose::Pose;
pub use view::View;

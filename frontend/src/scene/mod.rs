pub mod frame_loop;
pub mod gl;
pub mod model;
pub mod motion;
pub mod orbit;
pub mod viewer;

pub use frame_loop::FrameLoop;
pub use viewer::{ModelViewer, ModelViewerProps};

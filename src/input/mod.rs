//! Input handling: pointer polling and edge detection.

pub mod edge;
pub mod pointer;

pub use edge::{Edge, EdgeDetector};
pub use pointer::{DevicePointer, PointerSample, PointerSource};

//! I/O layer: decoding image files into boundary forms and the
//! directory-backed numbered image sink.
pub mod loader;
pub use loader::{load_image, load_images_from_dir};

pub mod sink;
pub use sink::{ImageSink, NamePattern};

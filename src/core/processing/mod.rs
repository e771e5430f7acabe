pub mod compose;
pub mod grid;
pub mod letterbox;
pub mod ops;
pub mod resize;
pub mod text;

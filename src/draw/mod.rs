mod drawer;
mod edge;
mod node;

pub use drawer::{DrawContext, Drawer};

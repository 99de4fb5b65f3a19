pub mod error;
mod path;

pub use crate::path::{SEPARATOR, VirtualPath};

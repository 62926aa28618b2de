//! Dataset loading

pub mod loader;

pub use loader::{DatasetError, DatasetLoader, load_dataset};

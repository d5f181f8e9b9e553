pub type F = f64;

pub mod classify;
pub mod face;
pub mod remap;

mod error;
pub use error::{CropError, CropResult};

mod parameters;
pub use parameters::Args;

mod crop;
pub use crop::{CropStats, crop_file};

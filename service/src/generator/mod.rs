//! Output generators for projected templates

pub mod data_harmonizer;
pub mod traits;

pub use data_harmonizer::DataHarmonizerGenerator;
pub use traits::{Generator, GeneratorError, GeneratorResult};

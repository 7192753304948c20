//! plotters-based rendering helpers for the benchmark figures.

mod bars;
mod lines;
mod style;

pub use bars::*;
pub use lines::*;
pub use style::*;

mod classify;
mod error;
mod extrapolate;
mod savgol;
mod slope;

pub use classify::*;
pub use error::*;
pub use extrapolate::*;
pub use savgol::*;
pub use slope::*;

mod ratio;
mod poly;

pub use ratio::*;
pub use poly::*;

mod mono;
mod ord;
mod poly;

pub use mono::*;
pub use ord::*;
pub use poly::*;

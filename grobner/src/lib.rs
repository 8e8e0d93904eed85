mod abst;
mod types;
mod misc;
mod err;
mod ideal;

pub use abst::*;
pub use types::*;
pub use misc::*;
pub use err::*;
pub use ideal::*;

pub mod io;
pub mod util;

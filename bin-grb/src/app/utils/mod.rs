mod helper;
mod ctype;

pub use helper::*;
pub use ctype::*;

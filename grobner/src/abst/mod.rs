mod elem;
mod add_grp;
mod ring;

pub use elem::*;
pub use add_grp::*;
pub use ring::*;

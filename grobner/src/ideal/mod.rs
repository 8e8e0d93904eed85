mod buchberger;
mod ideal;

pub use buchberger::*;
pub use ideal::*;

mod vars;
mod parser;
mod printer;

pub use vars::*;
pub use parser::*;
pub use printer::*;

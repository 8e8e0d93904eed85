mod app;
mod console;
mod err;
mod utils;

pub use app::*;

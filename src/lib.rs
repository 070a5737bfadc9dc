mod board;
mod commander;
mod common;
mod config;
mod game;
mod logging;
mod ship;

pub use board::*;
pub use commander::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use logging::init_logging;
pub use ship::*;

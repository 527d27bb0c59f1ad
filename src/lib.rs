pub mod map;
pub mod behavior;
pub mod collision;
mod config;
mod util;

pub use config::*;
pub use util::*;

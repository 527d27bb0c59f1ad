//! Typing of raw tile properties into a closed set of collision behaviors.
//! Strings are parsed here, once per load, and never on the per-tick path.
mod behavior;
mod error;
mod registry;
mod value;

pub use behavior::*;
pub use error::*;
pub use registry::*;
pub use value::{parse_coordinate, parse_float};

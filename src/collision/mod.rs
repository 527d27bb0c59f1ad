mod effect;
mod resolver;
mod spatial;

pub use effect::*;
pub use resolver::*;
pub use spatial::*;

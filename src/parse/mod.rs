pub mod filename;
pub mod timespan;

pub use filename::*;
pub use timespan::*;

pub mod export;
pub mod probe;

pub use export::*;
pub use probe::*;

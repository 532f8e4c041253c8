pub mod dataturks;
pub mod record;

pub use dataturks::*;
pub use record::*;

pub mod input;
pub mod output;
pub mod upload;

pub use input::*;
pub use output::*;
pub use upload::*;

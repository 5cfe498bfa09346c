pub mod analysis;
pub mod weather;

pub use analysis::*;
pub use weather::*;

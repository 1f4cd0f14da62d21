// Utils compartidos

pub mod constants;
pub mod stats;
pub mod storage;

pub use constants::*;
pub use stats::*;
pub use storage::*;

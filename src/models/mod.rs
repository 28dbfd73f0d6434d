pub mod grade;
pub mod quiz;

pub use grade::*;
pub use quiz::*;

pub mod raw;
pub mod signal;
pub mod market;
pub mod corpus;
pub mod research;

pub use raw::*;
pub use signal::*;
pub use market::*;
pub use corpus::*;
pub use research::*;

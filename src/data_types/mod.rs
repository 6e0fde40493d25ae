pub mod catalog;
pub mod curve;
pub mod event;
pub mod viewport;

pub use catalog::*;
pub use curve::*;
pub use event::*;
pub use viewport::*;

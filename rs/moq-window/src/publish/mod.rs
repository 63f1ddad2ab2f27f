mod map;
mod publisher;
mod streams;
mod transport;

pub use map::*;
pub use publisher::*;
pub use streams::*;
pub use transport::*;

mod forwarding;
mod location;
mod stream;
mod window;

pub use forwarding::*;
pub use location::*;
pub use stream::*;
pub use window::*;

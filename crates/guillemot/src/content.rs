mod collections;
mod front_matter;
mod post;
mod tags;

pub use collections::*;
pub use front_matter::*;
pub use post::*;
pub use tags::*;

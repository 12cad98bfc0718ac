mod popular_tags;

pub use popular_tags::*;

#![doc = include_str!("../README.md")]

pub mod content;
pub mod html;
pub mod widgets;
mod config;
mod permalink;
mod style;

pub use config::*;
pub use permalink::*;
pub use style::*;

mod event;

pub mod binning;
pub mod feed;

pub use event::*;

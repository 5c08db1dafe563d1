mod common;
mod match_item;
mod status;

pub use common::*;
pub use match_item::*;
pub use status::*;

//! Plain data types: order records, the status lifecycle, and the menu.

pub mod menu;
pub mod order;
pub mod status;

pub use menu::*;
pub use order::*;
pub use status::*;

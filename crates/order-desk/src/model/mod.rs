//! Pure data structures: the menu, cart drafts, orders and order filters.

pub mod cart;
pub mod filter;
pub mod menu;
pub mod order;

pub use cart::*;
pub use filter::*;
pub use menu::*;
pub use order::*;

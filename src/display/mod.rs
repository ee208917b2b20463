//! Display formatting for terminal output

pub mod room;

pub use room::{format_allocation_list, format_room_list};

pub mod demos;
pub mod menu;

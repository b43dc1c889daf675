pub mod controller;
pub mod dates;
pub mod state;

//! Domain models

pub mod booking;
pub mod room;
pub mod user;

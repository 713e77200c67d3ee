//! Outbound ports: what the application needs from the outside world.

pub mod odds;

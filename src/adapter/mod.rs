//! Adapters: the edges of the hexagon.
//!
//! - [`inbound`] - The command-line interface
//! - [`outbound`] - Odds sources (provider API, snapshot files)

pub mod inbound;
pub mod outbound;

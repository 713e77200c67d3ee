//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!          ┌─────────────────────────┐
//!          │       Application       │
//!          │     Domain + Port       │
//!          └────────────┬────────────┘
//!                       │ OddsSource
//!           ┌───────────┴───────────┐
//!           ▼                       ▼
//!    ┌─────────────┐         ┌─────────────┐
//!    │  Odds API   │         │  Snapshot   │
//!    │   Adapter   │         │   Adapter   │
//!    └─────────────┘         └─────────────┘
//! ```

pub mod outbound;

pub use outbound::odds::OddsSource;

//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!   ┌──────────────┐      ┌──────────────┐      ┌──────────────┐
//!   │  CLI adapter │ ───▶ │ Domain + Port│ ───▶ │ SQLite store │
//!   └──────────────┘      └──────────────┘      └──────────────┘
//! ```

pub mod outbound;

pub use outbound::store::ScoopStore;

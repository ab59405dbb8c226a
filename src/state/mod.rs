//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `bid`, `settings`) so individual
//! components can depend on small focused models. Each model is a plain
//! struct held in an `RwSignal` provided via context by the root `App`.

pub mod auth;
pub mod bid;
pub mod settings;

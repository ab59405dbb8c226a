//! Network layer: backend project configuration, REST adapters, and
//! wire types for the hosted auth and document-store services.

pub mod api;
pub mod firebase;
pub mod types;

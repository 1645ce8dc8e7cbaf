//! Geometric Rain (workspace facade crate).
//!
//! Re-exports the member crates under one path,
//! `geometric_rain::{types,core,input,term,store}`, while the implementation
//! lives in dedicated crates under `crates/`.

pub use geometric_rain_core as core;
pub use geometric_rain_input as input;
pub use geometric_rain_store as store;
pub use geometric_rain_term as term;
pub use geometric_rain_types as types;

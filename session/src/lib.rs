//! Stateless session adapter around the board engine.
//!
//! Loads a snapshot, applies one client action, hands back the snapshot and
//! the response view. Persistence across requests lives in [`SessionStore`];
//! callers serialize access per session key, one request at a time.

pub use adapter::*;
pub use error::*;
pub use store::*;

mod adapter;
mod error;
mod store;

//! Content-addressed card art cache backed by a remote avatar service.

pub mod fetch;
pub mod store;

pub use fetch::*;
pub use store::*;

//! Pack catalog and table configuration loading.

pub mod load;
pub mod schema;

pub use load::*;
pub use schema::*;

//! Table state model. Keep this crate free of IO and platform concerns.

pub mod cards;
pub mod config;
pub mod deck;
pub mod events;
pub mod geometry;
pub mod hand;
pub mod image;
pub mod pack;
pub mod rng;
pub mod table;

pub use cards::*;
pub use config::*;
pub use deck::*;
pub use events::*;
pub use geometry::*;
pub use hand::*;
pub use image::*;
pub use pack::*;
pub use rng::*;
pub use table::*;

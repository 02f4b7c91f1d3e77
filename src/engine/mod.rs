//! Engine seam: the trait the checks drive, plus a reference engine.

pub mod reference;
pub mod traits;

pub use reference::ReferenceEngine;
pub use traits::{GameEngine, KingdomSelection, KINGDOM_SIZE};

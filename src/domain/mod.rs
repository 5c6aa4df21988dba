//! Domain layer containing the core value pipeline.
//!
//! This module contains:
//! - The raw node model shared with the backing store
//! - Bounds and the ready-made bound libraries
//! - The outcome accumulator that classifies a pipeline run
//! - Containers for collection values
//! - Logger with rotation

mod bound;
pub mod bounds;
mod container;
mod error;
pub mod logger;
mod outcome;
mod types;

pub use bound::Bound;
pub use container::Container;
pub use error::{ConfigError, ParseError};
pub use outcome::{Accumulator, ConvertError, Outcome, Unreadable};
pub use types::{IntoRawNode, RawNode};

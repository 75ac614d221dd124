//! Common types, traits, and error definitions for dubins_planning
//!
//! This module provides the foundational building blocks shared by
//! the planner, the plotting utilities and the demo programs.

pub mod types;
pub mod traits;
pub mod error;

pub use types::*;
pub use traits::*;
pub use error::*;

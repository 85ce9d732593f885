//! Core types for the Tessel grid engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! vocabulary shared by every other Tessel crate: [`Position`],
//! [`Direction`], and the [`GridError`] type.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod direction;
pub mod error;
pub mod position;

pub use direction::Direction;
pub use error::GridError;
pub use position::{Position, PositionList};

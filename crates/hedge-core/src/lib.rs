//! Core value types for the Hedge maze toolkit.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the maze and routing crates: cardinal
//! headings, relative turns, grid positions, and the movement action
//! alphabet.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod action;
mod direction;
mod position;

pub use action::Action;
pub use direction::{Direction, Turn};
pub use position::Position;

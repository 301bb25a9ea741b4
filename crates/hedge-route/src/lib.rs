//! Wall-following exploration and route synthesis.
//!
//! This crate turns a [`Maze`](hedge_maze::Maze) and a starting
//! [`Runner`] into a final route in three stages:
//!
//! 1. [`explore`] drives the runner's wall-following rule until the
//!    goal is reached, producing a raw (possibly self-intersecting)
//!    trace;
//! 2. [`compact`] splices revisited-position loops out of the trace in
//!    a single linked-list pass;
//! 3. [`annotate`] converts the loop-free position sequence into
//!    relative turn-and-move instructions.
//!
//! [`shortest_path`] composes all three. The route is the shortest the
//! heuristic found, not necessarily the shortest possible.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod annotate;
mod compact;
mod error;
mod explore;
mod route;
mod runner;
pub mod scribe;

pub use annotate::{annotate, RouteStep};
pub use compact::compact;
pub use error::RouteError;
pub use explore::{default_step_limit, explore, explore_bounded, RawTrace, TraceEntry};
pub use route::shortest_path;
pub use runner::{Runner, SensedWalls};

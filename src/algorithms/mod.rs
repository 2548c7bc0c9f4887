//! # Graph Algorithms
//!
//! Algorithms operating on a built [`DirectedGraph`](crate::directed::DirectedGraph).
//! None of them mutate the graph they are given.
//!
//! ## Available Algorithms
//!
//! ### Topological Operations
//! - [`topological_order`]: Topological sorting using Kahn's algorithm, with cycle detection

pub mod topological_order;

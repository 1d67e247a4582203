//! Ordered in-memory key/value index backed by a
//! [left-leaning-red-black][llrb] tree.
//!
//! ```
//! use llrb_tree::Llrb;
//!
//! let mut llrb: Llrb<i64, &str> = Llrb::new("example");
//! for key in 1..10 {
//!     llrb.put(key, "payload");
//! }
//! assert_eq!(llrb.len(), 9);
//! assert_eq!(llrb.root().map(|n| *n.key()), Some(4));
//! assert_eq!(llrb.to_string(), "(((.1.)2(.3.))4((.5.)6((.7.)8(.9.))))");
//! ```
//!
//! [llrb]: https://en.wikipedia.org/wiki/Left-leaning_red-black_tree

mod config;
mod depth;
mod error;
mod llrb;
mod node;
mod visitor;

pub use crate::config::{Config, Split};
pub use crate::depth::Depth;
pub use crate::error::Error;
pub use crate::llrb::{Direction, Iter, Llrb, Stats};
pub use crate::node::{is_black, is_red, Node};
pub use crate::visitor::{Render, Visitor};

#[cfg(test)]
mod depth_test;

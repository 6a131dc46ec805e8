//! Generalized suffix tree index for exact substring lookup and approximate
//! document similarity.
//!
//! Each indexed string is a "document" identified by a caller-chosen,
//! non-decreasing `u32` id. Construction uses an online generalization of
//! Ukkonen's algorithm (the [`GeneralizedSuffixTree::insert`] documentation
//! has the construction walk-through); once every document is in, call
//! [`GeneralizedSuffixTree::aggregate`] once before [`GeneralizedSuffixTree::similar`]
//! or a hit from [`GeneralizedSuffixTree::search`].
//!
//! # Example
//!
//! ```
//! use gst_index::tree::GeneralizedSuffixTree;
//!
//! let mut gst = GeneralizedSuffixTree::new();
//! gst.insert("banana", 0).unwrap();
//! gst.insert("ananas", 1).unwrap();
//! gst.insert("bandana", 2).unwrap();
//! gst.aggregate();
//!
//! assert_eq!(gst.search("ana").unwrap().into_iter().collect::<Vec<_>>(), vec![0, 1, 2]);
//! assert_eq!(gst.search("ban").unwrap().into_iter().collect::<Vec<_>>(), vec![0, 2]);
//! assert_eq!(gst.search("nas").unwrap().into_iter().collect::<Vec<_>>(), vec![1]);
//!
//! let similar = gst.similar("banana", 0.3).unwrap();
//! assert!(similar.contains(&0));
//! ```
//!
//! # Out of scope
//!
//! String normalization (casing, alphanumeric filtering), a CLI/demo
//! harness, and on-disk persistence are all external collaborators this
//! crate does not provide. The index itself supports neither edit-distance
//! similarity nor deletion/mutation of a previously inserted document.

pub mod edge;
pub mod error;
pub mod node;
pub mod tree;

mod aggregate;
mod builder;
mod document;
mod edge_map;
mod search;
mod similarity;
mod span;

pub use error::{GstError, Result};
pub use tree::GeneralizedSuffixTree;

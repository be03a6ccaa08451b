//! Input formats for building a [`Graph`](crate::Graph).

mod edgelist;

pub use edgelist::{Delimiter, EdgeList, EdgeListConfig};

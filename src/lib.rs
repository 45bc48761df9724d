//! [Exact cover] solver using Knuth's [dancing links (DLX)] algorithm.
//!
//! [exact cover]: https://en.wikipedia.org/wiki/Exact_cover
//! [dancing links (DLX)]: https://en.wikipedia.org/wiki/Dancing_Links
//!
//! # Concept
//!
//! Many puzzle-like problems, such as polyomino packing, Sudoku, N-queens, and
//! so on, can be modeled as exact cover problems: given a universe of elements
//! and a collection of subsets of that universe, find every selection of
//! pairwise-disjoint subsets whose union is the whole universe. This crate
//! solves the generic problem, not any one puzzle built on top of it.
//!
//! # Basic example
//!
//! ```
//! use exact_cover::coverings;
//!
//! #[derive(Clone)]
//! struct Named(&'static str, Vec<i32>);
//!
//! impl IntoIterator for Named {
//!     type Item = i32;
//!     type IntoIter = std::vec::IntoIter<i32>;
//!     fn into_iter(self) -> Self::IntoIter {
//!         self.1.into_iter()
//!     }
//! }
//!
//! let subsets = vec![
//!     Named("A", vec![1, 2, 3]),
//!     Named("B", vec![1]),
//!     Named("C", vec![2]),
//!     Named("D", vec![3]),
//!     Named("E", vec![1, 2]),
//!     Named("F", vec![2, 3]),
//! ];
//!
//! let solutions: Vec<Vec<&str>> = coverings(subsets)
//!     .map(|tuple| tuple.iter().map(|rc| rc.0).collect())
//!     .collect();
//!
//! assert!(solutions.contains(&vec!["A"]));
//! ```
//!
//! There is no separate concept of a "row name" in the solver itself: a
//! subset is its own row-tag. `Named` above pairs a name with the subset's
//! elements by implementing `IntoIterator` over just the element half of
//! the struct, so the name rides along for free in the returned `Rc`.
//!
//! # Scope
//!
//! This crate implements only the solver core: the sparse-matrix substrate,
//! its builder, and the lazy solution iterator. Building concrete problem
//! instances (polyomino tilings, Sudoku grids, N-queens boards) and any
//! host-language binding glue are explicitly out of scope; see `demos/` in
//! this repository for worked examples built on top of the public API.

mod dlx;

mod coverings;
mod error;

pub use coverings::{coverings, Coverings};
pub use error::BuildError;

//! # u-tsp
//!
//! Euclidean traveling salesman heuristics: nearest-neighbor tour
//! construction refined by 3-opt and 2-opt local search, driven from
//! multiple randomized starts.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Point, Solution)
//! - [`distance`] — Dense Euclidean distance matrix
//! - [`evaluation`] — Cyclic tour length and permutation validation
//! - [`constructive`] — Nearest-neighbor tour construction
//! - [`local_search`] — Local search operators (2-opt, 3-opt)
//! - [`solver`] — Multi-start driver and seeded entry point
//! - [`io`] — Point loading and tour formatting
//!
//! ## Example
//!
//! ```
//! use u_tsp::models::Point;
//! use u_tsp::solver::solve;
//!
//! let points = vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(1.0, 0.0),
//!     Point::new(1.0, 1.0),
//!     Point::new(0.0, 1.0),
//! ];
//! let solution = solve(&points, 42);
//! assert!((solution.length() - 4.0).abs() < 1e-10);
//! ```

pub mod constructive;
pub mod distance;
pub mod evaluation;
pub mod io;
pub mod local_search;
pub mod models;
pub mod solver;

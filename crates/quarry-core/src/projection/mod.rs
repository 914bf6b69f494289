//! Projection-specification analysis: what field paths does a derived
//! shape read from its input record?

pub mod analyze;
pub mod expr;

pub use analyze::required_paths;
pub use expr::ProjectionExpr;

//! Point inclusion tests.
//!
//! Every shape tests world-space points through its cached global-to-local transform, against
//! the fixed predicate of its canonical form. All comparisons include the boundary.

mod point;

//! Sub-sample refinement of integer peak locations.
//!
//! Parabolic vertex fitting handles clean maxima; plateau centering handles
//! flat tops, which have no sub-sample vertex to fit.

pub mod parabola;
pub mod plateau;

pub use parabola::{interpolate_triple, parabola_vertex};
pub use plateau::plateau_center;

//! This module contains the wing planform, the cantilever bending solver which turns spanwise
//! load distributions into a deflection state, and the per-station section records that hand the
//! bent wing over to an `AirfoilProfile` for placement.

mod bending;
mod planform;
mod sections;

pub use bending::{
    BendingLoads, BendingSolution, DeflectionState, Derivative, Distribution, Tabulated, Uniform,
    section_second_moment,
};
pub use planform::{Wing, WingParams};
pub use sections::SectionPlacement;

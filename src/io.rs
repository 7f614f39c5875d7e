//! Reading profile coordinates and writing point sequences as plain text.
//!
//! The geometry math never calls into this module. It only consumes the point sequences the
//! geometry produces, so any change of units or axes for a downstream tool happens here.

mod curve_text;

pub use curve_text::{
    ExportFrame, INCHES_PER_METER, parse_profile_points, read_profile_points, write_curve,
    write_curves,
};

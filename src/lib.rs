//! Wing and nacelle geometry generation with cantilever bending of the wing under spanwise loads.
//!
//! A `Wing` is built from a handful of planform parameters, integrated against externally supplied
//! load distributions to get a `DeflectionState`, and then turned into `SectionPlacement` records
//! which an `AirfoilProfile` places into 3D space. A `Nacelle` generates its own circumferential
//! rings. Everything in here produces plain point sequences; writing them anywhere is left to the
//! `io` module or to the caller.

pub mod airfoil;
pub mod common;
pub mod config;
mod errors;
pub mod io;
pub mod nacelle;
pub mod wing;

pub use parry3d_f64::na;

pub use airfoil::AirfoilProfile;
pub use config::AircraftConfig;
pub use errors::AeroError;
pub use nacelle::{Nacelle, NacelleParams, Surface};
pub use wing::{
    BendingLoads, BendingSolution, DeflectionState, Derivative, Distribution, SectionPlacement,
    Tabulated, Uniform, Wing, WingParams,
};

pub type Point2 = parry2d_f64::na::Point2<f64>;
pub type Vector2 = parry2d_f64::na::Vector2<f64>;
pub type Point3 = parry3d_f64::na::Point3<f64>;
pub type Vector3 = parry3d_f64::na::Vector3<f64>;
pub type Iso3 = parry3d_f64::na::Isometry3<f64>;
pub type Aabb2 = parry2d_f64::bounding_volume::Aabb;
pub type Aabb3 = parry3d_f64::bounding_volume::Aabb;

pub type Result<T> = std::result::Result<T, AeroError>;

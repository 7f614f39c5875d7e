//! Cantilever bending of the wing under distributed spanwise loads.
//!
//! The wing is treated as a beam clamped at the root (station 0) and free at the tip. Starting
//! from the distributed load, shear, moment, slope and deflection are each found by a cumulative
//! integral from root to tip, with the free tip pinning shear and moment and the clamped root
//! pinning slope and deflection.

use crate::common::{Anchor, cumulative_integral, first_non_finite};
use crate::wing::Wing;
use crate::{AeroError, Result};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// A quantity distributed along the span of a wing, evaluated to one value per station.
pub trait Distribution {
    fn evaluate(&self, wing: &Wing) -> Vec<f64>;
}

impl<F> Distribution for F
where
    F: Fn(&Wing) -> Vec<f64>,
{
    fn evaluate(&self, wing: &Wing) -> Vec<f64> {
        self(wing)
    }
}

/// The same value at every station
#[derive(Debug, Clone, Copy)]
pub struct Uniform(pub f64);

impl Distribution for Uniform {
    fn evaluate(&self, wing: &Wing) -> Vec<f64> {
        vec![self.0; wing.resolution()]
    }
}

/// Values which have already been computed for each station. The length is not checked until the
/// distribution is used against a particular wing.
#[derive(Debug, Clone)]
pub struct Tabulated(pub Vec<f64>);

impl Distribution for Tabulated {
    fn evaluate(&self, _wing: &Wing) -> Vec<f64> {
        self.0.clone()
    }
}

/// Everything the bending solver needs besides the wing itself.
pub struct BendingLoads<'a> {
    /// Structural weight per unit span
    pub weight: &'a dyn Distribution,

    /// Lift per unit span
    pub lift: &'a dyn Distribution,

    /// Point shear from the engine, treated as acting at the tip
    pub engine_shear: f64,

    /// Wall thickness of the box spar
    pub wall_thickness: &'a dyn Distribution,

    /// Outer height of the box spar
    pub height: &'a dyn Distribution,

    /// Outer width of the box spar
    pub width: &'a dyn Distribution,

    pub youngs_modulus: f64,

    /// Incidence of the wing at the root, in degrees
    pub initial_angle: f64,
}

/// Identifies a row of the deflection state by its derivative order with respect to the span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Derivative {
    Deflection = 0,
    Slope = 1,
    Moment = 2,
    Shear = 3,
    Load = 4,
}

impl Derivative {
    pub const ALL: [Derivative; 5] = [
        Derivative::Deflection,
        Derivative::Slope,
        Derivative::Moment,
        Derivative::Shear,
        Derivative::Load,
    ];

    pub fn order(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Derivative::Deflection => "deflection",
            Derivative::Slope => "slope",
            Derivative::Moment => "moment",
            Derivative::Shear => "shear",
            Derivative::Load => "load",
        }
    }
}

/// A 5 x N table of the bending state along the span. Row `k` holds the quantity of derivative
/// order `k`: deflection, slope, bending moment, shear and distributed load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeflectionState {
    rows: [Vec<f64>; 5],
}

impl DeflectionState {
    pub fn row(&self, d: Derivative) -> &[f64] {
        &self.rows[d.order()]
    }

    pub fn rows(&self) -> &[Vec<f64>; 5] {
        &self.rows
    }

    pub fn deflection(&self) -> &[f64] {
        self.row(Derivative::Deflection)
    }

    /// Slope of the deflection curve in radians
    pub fn slope(&self) -> &[f64] {
        self.row(Derivative::Slope)
    }

    pub fn moment(&self) -> &[f64] {
        self.row(Derivative::Moment)
    }

    pub fn shear(&self) -> &[f64] {
        self.row(Derivative::Shear)
    }

    pub fn load(&self) -> &[f64] {
        self.row(Derivative::Load)
    }

    /// Number of stations
    pub fn len(&self) -> usize {
        self.rows[0].len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows[0].is_empty()
    }

    pub fn root(&self, d: Derivative) -> f64 {
        self.row(d)[0]
    }

    pub fn tip(&self, d: Derivative) -> f64 {
        let row = self.row(d);
        row[row.len() - 1]
    }

    /// Find the first non-finite value, searching from the load row down to the deflection row
    /// since a bad value propagates in that direction.
    fn first_degeneracy(&self) -> Option<(Derivative, usize, f64)> {
        Derivative::ALL.iter().rev().find_map(|d| {
            first_non_finite(self.row(*d)).map(|(station, value)| (*d, station, value))
        })
    }
}

/// The result of a bending run: the section second moment of area at each station and the
/// deflection state.
#[derive(Debug, Clone)]
pub struct BendingSolution {
    pub second_moment: Vec<f64>,
    pub state: DeflectionState,
}

/// Second moment of area of a thin walled rectangular box, the outer rectangle less the inner.
///
/// # Arguments
///
/// * `t`: wall thickness
/// * `h`: outer height
/// * `b`: outer width
///
/// returns: f64
///
/// # Examples
///
/// ```
/// use aerostruct::wing::section_second_moment;
/// let i = section_second_moment(0.0, 2.0, 3.0);
/// assert_eq!(i, 0.0);
/// ```
pub fn section_second_moment(t: f64, h: f64, b: f64) -> f64 {
    b * h.powi(3) / 12.0 - (b - t) * (h - t).powi(3) / 12.0
}

fn evaluate_checked(name: &str, dist: &dyn Distribution, wing: &Wing) -> Result<Vec<f64>> {
    let values = dist.evaluate(wing);
    AeroError::check_len(name, wing.resolution(), values.len())?;
    Ok(values)
}

impl Wing {
    /// Integrate the bending equation along the span for the given loads, returning the section
    /// second moment of area and a fresh deflection state.
    ///
    /// The distributed load is taken as `(weight + lift) / 2` at each station. Shear is anchored
    /// so that it equals `-engine_shear` at the tip and moment so that it vanishes at the tip.
    /// Slope is anchored to the initial angle (converted to radians) at the root and deflection
    /// to zero at the root. All four integrals run from root to tip with a step of `span / N`.
    ///
    /// Every distribution must produce exactly one value per station, otherwise a
    /// `ContractViolation` is returned. A station with zero stiffness produces a non-finite slope,
    /// which is reported as a `NumericDegeneracy` naming the quantity and station.
    ///
    /// # Arguments
    ///
    /// * `loads`: the load and structural distributions and the material stiffness
    ///
    /// returns: Result<BendingSolution, AeroError>
    ///
    /// # Examples
    ///
    /// ```
    /// use aerostruct::{BendingLoads, Uniform, Wing, WingParams};
    /// let wing = Wing::new(WingParams::new(10.0, 1.0, 5.0, 0.0, 0.0, 0.0, 100)).unwrap();
    /// let loads = BendingLoads {
    ///     weight: &Uniform(0.0),
    ///     lift: &Uniform(0.0),
    ///     engine_shear: 0.0,
    ///     wall_thickness: &Uniform(0.1),
    ///     height: &Uniform(0.1),
    ///     width: &Uniform(0.1),
    ///     youngs_modulus: 1e9,
    ///     initial_angle: 0.0,
    /// };
    /// let result = wing.bending_deflection(&loads).unwrap();
    /// assert!(result.state.deflection().iter().all(|v| *v == 0.0));
    /// ```
    pub fn bending_deflection(&self, loads: &BendingLoads) -> Result<BendingSolution> {
        if !(loads.youngs_modulus.is_finite() && loads.youngs_modulus > 0.0) {
            return Err(AeroError::config(format!(
                "Young's modulus must be positive, got {}",
                loads.youngs_modulus
            )));
        }
        if !loads.engine_shear.is_finite() || !loads.initial_angle.is_finite() {
            return Err(AeroError::config(
                "engine shear and initial angle must be finite",
            ));
        }

        let weight = evaluate_checked("weight", loads.weight, self)?;
        let lift = evaluate_checked("lift", loads.lift, self)?;
        let t = evaluate_checked("wall_thickness", loads.wall_thickness, self)?;
        let h = evaluate_checked("height", loads.height, self)?;
        let b = evaluate_checked("width", loads.width, self)?;

        let second_moment = t
            .iter()
            .zip(h.iter())
            .zip(b.iter())
            .map(|((t, h), b)| section_second_moment(*t, *h, *b))
            .collect::<Vec<_>>();

        let dx = self.dx();
        let e = loads.youngs_modulus;

        // Weight and lift are averaged into a single load, kept as a fixed modeling convention
        let load = weight
            .iter()
            .zip(lift.iter())
            .map(|(w, l)| (w + l) / 2.0)
            .collect::<Vec<_>>();

        let shear = cumulative_integral(&load, dx, Anchor::End(-loads.engine_shear));
        let moment = cumulative_integral(&shear, dx, Anchor::End(0.0));

        let curvature = moment
            .iter()
            .zip(second_moment.iter())
            .map(|(m, i)| m / (e * i))
            .collect::<Vec<_>>();
        let slope = cumulative_integral(
            &curvature,
            dx,
            Anchor::Start(loads.initial_angle.to_radians()),
        );
        let deflection = cumulative_integral(&slope, dx, Anchor::Start(0.0));

        let state = DeflectionState {
            rows: [deflection, slope, moment, shear, load],
        };

        if let Some((d, station, value)) = state.first_degeneracy() {
            warn!(
                "Bending integration produced a non-finite {} at station {} (I = {})",
                d.name(),
                station,
                second_moment[station]
            );
            return Err(AeroError::NumericDegeneracy {
                quantity: d.name(),
                station,
                value,
            });
        }

        debug!(
            "Bending solved over {} stations: tip deflection {:.6e}, tip slope {:.6e}",
            state.len(),
            state.tip(Derivative::Deflection),
            state.tip(Derivative::Slope)
        );

        Ok(BendingSolution {
            second_moment,
            state,
        })
    }
}

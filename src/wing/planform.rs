use crate::common::{linear_space, trapezoid};
use crate::{AeroError, Result};
use log::debug;
use serde::{Deserialize, Serialize};

fn default_resolution() -> usize {
    1000
}

/// The planform parameters of a wing. Angles are in degrees and lengths are in whatever unit the
/// caller is working in, the geometry does not care as long as it is consistent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WingParams {
    /// Full length of the wing from root to tip
    pub span: f64,

    /// Chord length at the root station
    pub root_chord: f64,

    /// Spanwise station where the trailing edge angle changes
    pub break_station: f64,

    /// Leading edge angle, applied along the whole span
    pub theta1: f64,

    /// Trailing edge angle outboard of the break station
    pub theta2: f64,

    /// Trailing edge angle inboard of the break station
    pub theta3: f64,

    /// Number of spanwise stations, at least 2
    #[serde(default = "default_resolution")]
    pub resolution: usize,
}

impl WingParams {
    pub fn new(
        span: f64,
        root_chord: f64,
        break_station: f64,
        theta1: f64,
        theta2: f64,
        theta3: f64,
        resolution: usize,
    ) -> Self {
        Self {
            span,
            root_chord,
            break_station,
            theta1,
            theta2,
            theta3,
            resolution,
        }
    }

    fn validate(&self) -> Result<()> {
        if self.resolution < 2 {
            return Err(AeroError::config(format!(
                "wing resolution must be at least 2, got {}",
                self.resolution
            )));
        }
        if !(self.span.is_finite() && self.span > 0.0) {
            return Err(AeroError::config(format!(
                "wing span must be positive, got {}",
                self.span
            )));
        }
        if !(self.root_chord.is_finite() && self.root_chord > 0.0) {
            return Err(AeroError::config(format!(
                "root chord must be positive, got {}",
                self.root_chord
            )));
        }
        let angles = [self.break_station, self.theta1, self.theta2, self.theta3];
        if angles.iter().any(|v| !v.is_finite()) {
            return Err(AeroError::config(
                "break station and planform angles must be finite",
            ));
        }
        Ok(())
    }
}

/// An immutable wing planform discretized into uniformly spaced spanwise stations. The upper
/// curve is the leading edge line and the lower curve is the trailing edge line, with the local
/// chord being the distance between them.
#[derive(Debug, Clone)]
pub struct Wing {
    params: WingParams,
    x_coords: Vec<f64>,
    arg_r: usize,
    upper: Vec<f64>,
    lower: Vec<f64>,
    area: f64,
    aspect_ratio: f64,
}

impl Wing {
    /// Build the wing and all of its derived planform quantities. Fails if the parameters are out
    /// of range or if the resulting planform has no positive area.
    ///
    /// # Arguments
    ///
    /// * `params`: the planform parameters
    ///
    /// returns: Result<Wing, AeroError>
    ///
    /// # Examples
    ///
    /// ```
    /// use aerostruct::{Wing, WingParams};
    /// let wing = Wing::new(WingParams::new(10.0, 1.0, 5.0, 0.0, 0.0, 0.0, 100)).unwrap();
    /// assert_eq!(wing.x_coords().len(), 100);
    /// assert!((wing.area() - 10.0).abs() < 1e-9);
    /// ```
    pub fn new(params: WingParams) -> Result<Self> {
        params.validate()?;

        let x_coords = linear_space(0.0, params.span, params.resolution);
        let arg_r = x_coords
            .iter()
            .position(|x| *x > params.break_station)
            .unwrap_or(x_coords.len());

        let mut wing = Self {
            params,
            x_coords,
            arg_r,
            upper: Vec::new(),
            lower: Vec::new(),
            area: 0.0,
            aspect_ratio: 0.0,
        };

        wing.upper = wing.x_coords.iter().map(|x| wing.upper_at(*x)).collect();
        // Stations from `arg_r` onwards are exactly those with x > break_station, so the pointwise
        // law splits the tables at the break index
        wing.lower = wing.x_coords.iter().map(|x| wing.lower_at(*x)).collect();

        wing.area = trapezoid(&wing.x_coords, &wing.chords());
        if !(wing.area.is_finite() && wing.area > 0.0) {
            return Err(AeroError::config(format!(
                "planform area must be positive, got {}",
                wing.area
            )));
        }
        wing.aspect_ratio = wing.params.span.powi(2) / wing.area;

        debug!(
            "Wing built: {} stations, break index {}, area {:.6}, aspect ratio {:.6}",
            wing.x_coords.len(),
            wing.arg_r,
            wing.area,
            wing.aspect_ratio
        );

        Ok(wing)
    }

    pub fn params(&self) -> &WingParams {
        &self.params
    }

    pub fn span(&self) -> f64 {
        self.params.span
    }

    pub fn root_chord(&self) -> f64 {
        self.params.root_chord
    }

    /// The number of spanwise stations
    pub fn resolution(&self) -> usize {
        self.x_coords.len()
    }

    /// The spanwise stations, strictly increasing from 0 at the root to the span at the tip
    pub fn x_coords(&self) -> &[f64] {
        &self.x_coords
    }

    /// Index of the first station which lies outboard of the break station. Equal to the number of
    /// stations when no station does.
    pub fn break_index(&self) -> usize {
        self.arg_r
    }

    /// The step used by the bending integration. This is the span divided by the number of
    /// stations, which is slightly smaller than the spacing between stations.
    pub fn dx(&self) -> f64 {
        self.params.span / self.x_coords.len() as f64
    }

    /// Leading edge curve evaluated at every station
    pub fn upper(&self) -> &[f64] {
        &self.upper
    }

    /// Trailing edge curve evaluated at every station
    pub fn lower(&self) -> &[f64] {
        &self.lower
    }

    /// Evaluate the leading edge curve at an arbitrary spanwise position
    pub fn upper_at(&self, x: f64) -> f64 {
        -self.params.theta1.to_radians().tan() * x
    }

    /// Evaluate the trailing edge curve at an arbitrary spanwise position. Inboard of (and at) the
    /// break station the inboard angle is used, outboard of it the curve continues from the break
    /// point with the outboard angle.
    pub fn lower_at(&self, x: f64) -> f64 {
        let p = &self.params;
        let t2 = p.theta2.to_radians().tan();
        let t3 = p.theta3.to_radians().tan();
        if x > p.break_station {
            -t3 * p.break_station - t2 * (x - p.break_station) - p.root_chord
        } else {
            -t3 * x - p.root_chord
        }
    }

    /// Local chord at station `i`
    pub fn chord(&self, i: usize) -> f64 {
        self.upper[i] - self.lower[i]
    }

    /// Local chord at every station
    pub fn chords(&self) -> Vec<f64> {
        self.upper
            .iter()
            .zip(self.lower.iter())
            .map(|(u, l)| u - l)
            .collect()
    }

    /// Planform area, integrated over the stations with the trapezoid rule
    pub fn area(&self) -> f64 {
        self.area
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.aspect_ratio
    }
}

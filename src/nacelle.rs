//! Axisymmetric nacelle surfaces built from an ellipsoidal taper law.
//!
//! A nacelle is described by the frontal area it must enclose around a hub, its length, the wall
//! width of the cowl and the fraction of the maximum radius which remains at the aft end. Its
//! surfaces are produced as closed circumferential rings of points at stations along its axis.

use crate::common::linear_space;
use crate::{AeroError, Point3, Result};
use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

fn default_resolution() -> usize {
    1000
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NacelleParams {
    /// Frontal area enclosed between the hub and the inner surface
    pub area: f64,

    pub hub_radius: f64,

    /// Length along the nacelle axis
    pub length: f64,

    /// Cowl wall width, the gap between the inner and outer surfaces
    pub width: f64,

    /// Ratio of the radius at the aft end to the radius at the front, in (0, 1]
    pub percent_drop: f64,

    /// Number of points in each circumferential ring, at least 3
    #[serde(default = "default_resolution")]
    pub resolution: usize,
}

impl NacelleParams {
    pub fn new(
        area: f64,
        hub_radius: f64,
        length: f64,
        width: f64,
        percent_drop: f64,
        resolution: usize,
    ) -> Self {
        Self {
            area,
            hub_radius,
            length,
            width,
            percent_drop,
            resolution,
        }
    }

    fn validate(&self) -> Result<()> {
        let non_negative = [
            ("area", self.area),
            ("hub radius", self.hub_radius),
            ("width", self.width),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(AeroError::config(format!(
                    "nacelle {} must be non-negative, got {}",
                    name, value
                )));
            }
        }
        if !(self.length.is_finite() && self.length > 0.0) {
            return Err(AeroError::config(format!(
                "nacelle length must be positive, got {}",
                self.length
            )));
        }
        // With the drop in (0, 1] the taper radicand stays at or above drop^2 over the length
        if !(self.percent_drop > 0.0 && self.percent_drop <= 1.0) {
            return Err(AeroError::config(format!(
                "percent drop must be in (0, 1], got {}",
                self.percent_drop
            )));
        }
        if self.resolution < 3 {
            return Err(AeroError::config(format!(
                "nacelle ring resolution must be at least 3, got {}",
                self.resolution
            )));
        }
        Ok(())
    }
}

/// Which of the two nacelle surfaces to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Surface {
    /// The surface bounding the flow area around the hub
    Inner,

    /// The inner surface pushed out by the wall width
    Outer,
}

#[derive(Debug, Clone)]
pub struct Nacelle {
    params: NacelleParams,
    radius: f64,
    outer_radius: f64,
}

impl Nacelle {
    /// Create a nacelle, computing the maximum inner radius `sqrt(area / pi + r^2)` and the
    /// maximum outer radius from it.
    ///
    /// # Examples
    ///
    /// ```
    /// use aerostruct::{Nacelle, NacelleParams};
    /// use std::f64::consts::PI;
    /// let nacelle = Nacelle::new(NacelleParams::new(3.0 * PI, 1.0, 4.0, 0.1, 0.8, 64)).unwrap();
    /// assert!((nacelle.radius() - 2.0).abs() < 1e-12);
    /// assert!((nacelle.outer_radius() - 2.1).abs() < 1e-12);
    /// ```
    pub fn new(params: NacelleParams) -> Result<Self> {
        params.validate()?;
        let radius = (params.area / PI + params.hub_radius.powi(2)).sqrt();
        if radius <= 0.0 {
            return Err(AeroError::config(
                "nacelle must have a positive area or hub radius",
            ));
        }
        let outer_radius = radius + params.width;

        debug!(
            "Nacelle built: inner radius {:.6}, outer radius {:.6}, length {:.6}",
            radius, outer_radius, params.length
        );

        Ok(Self {
            params,
            radius,
            outer_radius,
        })
    }

    pub fn params(&self) -> &NacelleParams {
        &self.params
    }

    /// Maximum radius of the inner surface
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Maximum radius of the outer surface
    pub fn outer_radius(&self) -> f64 {
        self.outer_radius
    }

    pub fn surface_radius(&self, surface: Surface) -> f64 {
        match surface {
            Surface::Inner => self.radius,
            Surface::Outer => self.outer_radius,
        }
    }

    /// Radius of a surface with maximum radius `r0` at axial distance `x` from the front,
    /// `r0 * sqrt(1 - x^2 (1 - k^2) / a^2)`. This is `r0` at the front and `r0 * k` at the aft
    /// end, and is only meaningful for `x` in `[0, a]`.
    pub fn local_radius(&self, x: f64, r0: f64) -> f64 {
        let k = self.params.percent_drop;
        let a = self.params.length;
        r0 * (1.0 - x.powi(2) * (1.0 - k.powi(2)) / a.powi(2)).sqrt()
    }

    /// Generate one closed ring of points on the given surface.
    ///
    /// The ring sits at `percent_span * length` along the nacelle axis. The axis starts at
    /// `origin` and runs in the -y direction, rotated by `toe_in` in the horizontal (x, y) plane.
    /// The final point revisits the starting angle, so the ring is closed.
    ///
    /// # Arguments
    ///
    /// * `percent_span`: normalized axial station in [0, 1]
    /// * `origin`: position of the front of the nacelle axis
    /// * `toe_in`: angle of the nacelle axis in the horizontal plane, radians
    /// * `surface`: inner or outer surface
    ///
    /// returns: Result<Vec<OPoint<f64, Const<3>>, Global>, AeroError>
    pub fn place(
        &self,
        percent_span: f64,
        origin: &Point3,
        toe_in: f64,
        surface: Surface,
    ) -> Result<Vec<Point3>> {
        if !(0.0..=1.0).contains(&percent_span) {
            return Err(AeroError::config(format!(
                "percent span must be in [0, 1], got {}",
                percent_span
            )));
        }
        Ok(self.ring(percent_span, origin, toe_in, self.surface_radius(surface)))
    }

    pub fn place_outer(
        &self,
        percent_span: f64,
        origin: &Point3,
        toe_in: f64,
    ) -> Result<Vec<Point3>> {
        self.place(percent_span, origin, toe_in, Surface::Outer)
    }

    pub fn place_inner(
        &self,
        percent_span: f64,
        origin: &Point3,
        toe_in: f64,
    ) -> Result<Vec<Point3>> {
        self.place(percent_span, origin, toe_in, Surface::Inner)
    }

    /// Generate `count` rings on one surface at evenly spaced stations from the front to the aft
    /// end, inclusive. Rings are generated in parallel and returned front to back.
    pub fn rings(
        &self,
        count: usize,
        surface: Surface,
        origin: &Point3,
        toe_in: f64,
    ) -> Result<Vec<Vec<Point3>>> {
        if count < 2 {
            return Err(AeroError::config(format!(
                "at least 2 rings are needed to span the nacelle, got {}",
                count
            )));
        }
        let r0 = self.surface_radius(surface);
        Ok(linear_space(0.0, 1.0, count)
            .par_iter()
            .map(|p| self.ring(*p, origin, toe_in, r0))
            .collect())
    }

    fn ring(&self, percent_span: f64, origin: &Point3, toe_in: f64, r0: f64) -> Vec<Point3> {
        let n = self.params.resolution;
        let axial = percent_span * self.params.length;
        let r = self.local_radius(axial, r0);
        let (sin_toe, cos_toe) = toe_in.sin_cos();

        let center = Point3::new(
            origin.x + axial * sin_toe,
            origin.y - axial * cos_toe,
            origin.z,
        );

        let mut points = linear_space(0.0, 2.0 * PI, n)
            .iter()
            .take(n - 1)
            .map(|theta| {
                let (s, c) = theta.sin_cos();
                Point3::new(
                    center.x + r * c * cos_toe,
                    center.y + r * c * sin_toe,
                    center.z + r * s,
                )
            })
            .collect::<Vec<_>>();
        points.push(points[0]);
        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use test_case::test_case;

    fn nacelle(percent_drop: f64) -> Nacelle {
        Nacelle::new(NacelleParams::new(0.5, 0.1, 1.2, 0.02, percent_drop, 73)).unwrap()
    }

    #[test]
    fn radii_from_area() {
        let n = nacelle(0.8);
        let expected = (0.5 / PI + 0.01).sqrt();
        assert_relative_eq!(n.radius(), expected, epsilon = 1e-15);
        assert_relative_eq!(n.outer_radius(), expected + 0.02, epsilon = 1e-15);
    }

    #[test]
    fn no_taper_keeps_radius() {
        let n = nacelle(1.0);
        for x in linear_space(0.0, 1.2, 50) {
            assert_eq!(n.local_radius(x, 0.7), 0.7);
        }
    }

    #[test_case(0.2)]
    #[test_case(0.5)]
    #[test_case(0.9)]
    fn taper_end_points(k: f64) {
        let n = nacelle(k);
        assert_relative_eq!(n.local_radius(0.0, 2.0), 2.0, epsilon = 1e-15);
        assert_relative_eq!(n.local_radius(1.2, 2.0), 2.0 * k, epsilon = 1e-12);

        // Monotonically shrinking along the length
        let radii = linear_space(0.0, 1.2, 40)
            .iter()
            .map(|x| n.local_radius(*x, 2.0))
            .collect::<Vec<_>>();
        assert!(radii.windows(2).all(|w| w[1] < w[0]));
    }

    #[test]
    fn ring_is_closed_and_round() {
        let n = nacelle(0.6);
        let origin = Point3::new(1.0, 2.0, -0.5);
        let ring = n.place_inner(0.5, &origin, 0.0).unwrap();
        assert_eq!(ring.len(), 73);
        assert_eq!(ring[0], ring[72]);

        let r = n.local_radius(0.6, n.radius());
        let center = Point3::new(1.0, 2.0 - 0.6, -0.5);
        for p in ring.iter() {
            assert_relative_eq!((p - center).norm(), r, epsilon = 1e-12);
            assert_relative_eq!(p.y, center.y, epsilon = 1e-12);
        }
    }

    #[test_case(0.0)]
    #[test_case(0.05)]
    #[test_case(-0.1)]
    fn ring_is_perpendicular_to_toed_axis(toe_in: f64) {
        let n = nacelle(0.7);
        let origin = Point3::origin();
        let ring = n.place_outer(1.0, &origin, toe_in).unwrap();
        let axis = crate::Vector3::new(toe_in.sin(), -toe_in.cos(), 0.0);
        let center = origin + axis * 1.2;
        let r = n.outer_radius() * 0.7;
        for p in ring.iter() {
            let v = p - center;
            assert_relative_eq!(v.dot(&axis), 0.0, epsilon = 1e-12);
            assert_relative_eq!(v.norm(), r, epsilon = 1e-12);
        }
    }

    #[test]
    fn batch_rings_match_single_rings() {
        let n = nacelle(0.5);
        let origin = Point3::new(0.0, 3.0, 0.2);
        let rings = n.rings(5, Surface::Outer, &origin, 0.03).unwrap();
        assert_eq!(rings.len(), 5);
        for (ring, p) in rings.iter().zip(linear_space(0.0, 1.0, 5)) {
            assert_eq!(*ring, n.place(p, &origin, 0.03, Surface::Outer).unwrap());
        }
        assert!(n.rings(1, Surface::Inner, &origin, 0.0).is_err());
    }

    #[test_case(-0.01)]
    #[test_case(1.01)]
    #[test_case(f64::NAN)]
    fn percent_span_out_of_range(p: f64) {
        let n = nacelle(0.5);
        assert!(matches!(
            n.place_inner(p, &Point3::origin(), 0.0),
            Err(AeroError::Configuration(_))
        ));
    }

    #[test_case(0.0)]
    #[test_case(-0.5)]
    #[test_case(1.5)]
    #[test_case(f64::NAN)]
    fn invalid_percent_drop(k: f64) {
        let result = Nacelle::new(NacelleParams::new(0.5, 0.1, 1.2, 0.02, k, 73));
        assert!(matches!(result, Err(AeroError::Configuration(_))));
    }

    #[test]
    fn invalid_geometry() {
        let bad = [
            NacelleParams::new(0.5, 0.1, 0.0, 0.02, 0.5, 73),
            NacelleParams::new(-0.5, 0.1, 1.0, 0.02, 0.5, 73),
            NacelleParams::new(0.5, 0.1, 1.0, -0.02, 0.5, 73),
            NacelleParams::new(0.5, 0.1, 1.0, 0.02, 0.5, 2),
            NacelleParams::new(0.0, 0.0, 1.0, 0.02, 0.5, 73),
        ];
        for params in bad {
            assert!(matches!(
                Nacelle::new(params),
                Err(AeroError::Configuration(_))
            ));
        }
    }
}

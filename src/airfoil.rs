//! This module contains the airfoil cross-section profile and the transform which places a scaled,
//! twisted and pitched copy of it into 3D space at a wing station.

use crate::na::{Translation3, UnitQuaternion};
use crate::wing::SectionPlacement;
use crate::{Aabb2, AeroError, Iso3, Point2, Point3, Result, Vector3};
use log::debug;
use rayon::prelude::*;
use std::path::Path;

/// A closed 2D airfoil section curve, normalized by chord. The first coordinate is the chordwise
/// position and the second is the thickness position. The last point of the curve is always equal
/// to the first, so consumers can treat it as a loop without handling the wraparound.
#[derive(Debug, Clone)]
pub struct AirfoilProfile {
    base: Vec<Point2>,
    flipped: bool,
}

impl AirfoilProfile {
    /// Create a new profile from an ordered set of section points. If the last point is not
    /// already equal to the first, the first point is appended to close the curve. When `flip` is
    /// set the chordwise coordinate of every point is negated, mirroring the section.
    ///
    /// # Arguments
    ///
    /// * `points`: the ordered section points, at least 3 and all finite
    /// * `flip`: mirror the section by negating the chordwise axis
    ///
    /// returns: Result<AirfoilProfile, AeroError>
    ///
    /// # Examples
    ///
    /// ```
    /// use aerostruct::{AirfoilProfile, Point2};
    /// let points = vec![Point2::new(1.0, 0.0), Point2::new(0.0, 0.1), Point2::new(0.0, -0.1)];
    /// let profile = AirfoilProfile::new(points, false).unwrap();
    /// assert_eq!(profile.len(), 4);
    /// assert_eq!(profile.points()[0], profile.points()[3]);
    /// ```
    pub fn new(points: Vec<Point2>, flip: bool) -> Result<Self> {
        if points.len() < 3 {
            return Err(AeroError::config(format!(
                "an airfoil profile needs at least 3 points, got {}",
                points.len()
            )));
        }
        if points.iter().any(|p| !(p.x.is_finite() && p.y.is_finite())) {
            return Err(AeroError::config("airfoil profile points must be finite"));
        }

        let mut base = points;
        if base.first() != base.last() {
            base.push(base[0]);
        }
        if flip {
            base.iter_mut().for_each(|p| p.x = -p.x);
        }

        debug!(
            "Airfoil profile created with {} points (flipped: {})",
            base.len(),
            flip
        );

        Ok(Self {
            base,
            flipped: flip,
        })
    }

    /// Load a profile from a whitespace delimited coordinate file, skipping `header_lines` lines
    /// at the top of the file.
    pub fn from_file(path: &Path, header_lines: usize, flip: bool) -> Result<Self> {
        let points = crate::io::read_profile_points(path, header_lines)?;
        Self::new(points, flip)
    }

    /// The closed base curve
    pub fn points(&self) -> &[Point2] {
        &self.base
    }

    pub fn len(&self) -> usize {
        self.base.len()
    }

    pub fn is_empty(&self) -> bool {
        self.base.is_empty()
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    /// Bounding box of the base curve in normalized coordinates
    pub fn aabb(&self) -> Aabb2 {
        Aabb2::from_points(&self.base)
    }

    /// The rigid part of the placement: twist about the spanwise axis, then the pitch in the
    /// spanwise/vertical plane, then translation to the reference position.
    pub fn placement_transform(twist: f64, pitch: f64, position: &Point3) -> Iso3 {
        let twist = UnitQuaternion::from_axis_angle(&Vector3::x_axis(), twist);
        let pitch = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), -pitch);
        Iso3::from_parts(Translation3::from(position.coords), pitch * twist)
    }

    /// Place the section into 3D space. Each point of the base curve is scaled by `chord` in the
    /// chordwise direction and by `chord * thickness` in the thickness direction, rotated by
    /// `twist` in the chordwise/thickness plane, rotated by `pitch` in the spanwise/thickness
    /// plane and finally translated to `position`. Both rotations take a pair `(a, b)` to
    /// `(a cos - b sin, a sin + b cos)`.
    ///
    /// The result has the same length and order as the base curve, so it is closed as well.
    ///
    /// # Arguments
    ///
    /// * `chord`: chord length of the section
    /// * `thickness`: thickness to chord ratio
    /// * `twist`: local twist, radians
    /// * `pitch`: global pitch, typically the bending slope, radians
    /// * `position`: reference position as (spanwise, chordwise, vertical)
    ///
    /// returns: Vec<OPoint<f64, Const<3>>, Global>
    pub fn place(
        &self,
        chord: f64,
        thickness: f64,
        twist: f64,
        pitch: f64,
        position: &Point3,
    ) -> Vec<Point3> {
        let iso = Self::placement_transform(twist, pitch, position);
        self.base
            .iter()
            .map(|p| iso * Point3::new(0.0, p.x * chord, p.y * chord * thickness))
            .collect()
    }

    /// Place the section described by a single placement record
    pub fn place_section(&self, section: &SectionPlacement) -> Vec<Point3> {
        self.place(
            section.chord,
            section.thickness,
            section.twist,
            section.pitch,
            &section.position,
        )
    }

    /// Place every section in parallel, returning the curves in the same order as the records.
    pub fn place_sections(&self, sections: &[SectionPlacement]) -> Vec<Vec<Point3>> {
        sections
            .par_iter()
            .map(|s| self.place_section(s))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;
    use test_case::test_case;

    fn diamond() -> AirfoilProfile {
        let points = vec![
            Point2::new(1.0, 0.0),
            Point2::new(0.5, 0.06),
            Point2::new(0.0, 0.0),
            Point2::new(0.5, -0.04),
        ];
        AirfoilProfile::new(points, false).unwrap()
    }

    fn rotate(a: f64, b: f64, angle: f64) -> (f64, f64) {
        (
            a * angle.cos() - b * angle.sin(),
            a * angle.sin() + b * angle.cos(),
        )
    }

    #[test]
    fn profile_is_closed() {
        let p = diamond();
        assert_eq!(p.len(), 5);
        assert_eq!(p.points()[0], p.points()[4]);
    }

    #[test]
    fn closed_input_is_not_closed_again() {
        let points = vec![
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 0.1),
            Point2::new(0.0, -0.1),
            Point2::new(1.0, 0.0),
        ];
        let p = AirfoilProfile::new(points, false).unwrap();
        assert_eq!(p.len(), 4);
    }

    #[test]
    fn flip_negates_chordwise_axis() {
        let p = diamond();
        let f = AirfoilProfile::new(p.points()[..4].to_vec(), true).unwrap();
        assert!(f.is_flipped());
        for (a, b) in p.points().iter().zip(f.points()) {
            assert_eq!(a.x, -b.x);
            assert_eq!(a.y, b.y);
        }
        let bounds = f.aabb();
        assert_relative_eq!(bounds.mins.x, -1.0);
        assert_relative_eq!(bounds.maxs.x, 0.0);
    }

    #[test]
    fn too_few_points() {
        let points = vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)];
        assert!(matches!(
            AirfoilProfile::new(points, false),
            Err(AeroError::Configuration(_))
        ));
    }

    #[test]
    fn identity_placement_reproduces_base() {
        let p = diamond();
        let placed = p.place(1.0, 1.0, 0.0, 0.0, &Point3::origin());
        assert_eq!(placed.len(), p.len());
        for (a, b) in p.points().iter().zip(placed.iter()) {
            assert_relative_eq!(b.x, 0.0, epsilon = 1e-15);
            assert_relative_eq!(b.y, a.x, epsilon = 1e-15);
            assert_relative_eq!(b.z, a.y, epsilon = 1e-15);
        }
    }

    #[test_case(2.0, 0.12, 0.0, 0.0)]
    #[test_case(1.5, 0.1, 0.3, 0.0)]
    #[test_case(0.7, 0.15, 0.0, -0.2)]
    #[test_case(3.0, 0.09, -0.25, 0.4)]
    #[test_case(1.0, 1.0, PI / 2.0, PI / 3.0)]
    fn placement_matches_stepwise_transform(chord: f64, thickness: f64, twist: f64, pitch: f64) {
        let p = diamond();
        let position = Point3::new(4.0, -0.3, 0.25);
        let placed = p.place(chord, thickness, twist, pitch, &position);

        for (b, r) in p.points().iter().zip(placed.iter()) {
            // Scale
            let (y, z) = (b.x * chord, b.y * chord * thickness);
            // Twist in the chordwise/thickness plane
            let (y, z) = rotate(y, z, twist);
            // Pitch in the spanwise/thickness plane
            let (x, z) = rotate(0.0, z, pitch);

            assert_relative_eq!(r.x, x + position.x, epsilon = 1e-12);
            assert_relative_eq!(r.y, y + position.y, epsilon = 1e-12);
            assert_relative_eq!(r.z, z + position.z, epsilon = 1e-12);
        }
    }

    #[test]
    fn transform_order_matters() {
        // Pitching first and twisting second gives a different section
        let p = diamond();
        let placed = p.place(1.0, 1.0, 0.5, 0.5, &Point3::origin());
        let swapped = UnitQuaternion::from_axis_angle(&Vector3::x_axis(), 0.5)
            * UnitQuaternion::from_axis_angle(&Vector3::y_axis(), -0.5);
        let differs = p.points().iter().zip(placed.iter()).any(|(b, r)| {
            let s = swapped * Point3::new(0.0, b.x, b.y);
            (s - r).norm() > 1e-6
        });
        assert!(differs);
    }

    #[test]
    fn placed_sections_stay_closed_and_ordered() {
        let p = diamond();
        let sections = (0..10)
            .map(|i| SectionPlacement {
                station: i,
                chord: 1.0 + i as f64 * 0.1,
                thickness: 0.12,
                twist: -0.01 * i as f64,
                pitch: 0.002 * i as f64,
                position: Point3::new(i as f64, 0.0, 0.01 * i as f64),
            })
            .collect::<Vec<_>>();

        let curves = p.place_sections(&sections);
        assert_eq!(curves.len(), 10);
        for (s, c) in sections.iter().zip(curves.iter()) {
            assert_eq!(c.len(), p.len());
            assert_eq!(c[0], c[c.len() - 1]);
            assert_eq!(*c, p.place_section(s));
        }
    }
}

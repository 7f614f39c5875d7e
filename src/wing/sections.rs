//! Per-station records which carry the bent wing over to the airfoil placement transform.

use crate::wing::{DeflectionState, Wing};
use crate::{AeroError, Point3, Result};
use serde::{Deserialize, Serialize};

/// Everything needed to place one airfoil cross-section into 3D space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionPlacement {
    /// Index of the wing station this section was taken from
    pub station: usize,

    /// Local chord length
    pub chord: f64,

    /// Thickness to chord ratio
    pub thickness: f64,

    /// Local twist of the section, radians
    pub twist: f64,

    /// Pitch of the section from the bending slope, radians
    pub pitch: f64,

    /// Reference position as (spanwise, chordwise, vertical)
    pub position: Point3,
}

impl Wing {
    /// The station stride which produces roughly 25 sections along the wing.
    pub fn default_stride(&self) -> usize {
        ((self.resolution() as f64 / 25.0).round() as usize).max(1)
    }

    /// Build the section placement records for every `stride`-th station of the wing, always
    /// finishing with the tip station. Each record takes its chord from the planform, its pitch
    /// from the bending slope and its position from the station, the leading edge curve and the
    /// deflection.
    ///
    /// # Arguments
    ///
    /// * `state`: a deflection state computed for this wing
    /// * `thickness`: thickness to chord ratio at every station
    /// * `twist`: section twist at every station, in radians
    /// * `span_offset`: spanwise distance added to every station, e.g. the fuselage half width
    /// * `stride`: number of stations between consecutive sections, must be at least 1
    ///
    /// returns: Result<Vec<SectionPlacement, Global>, AeroError>
    pub fn section_placements(
        &self,
        state: &DeflectionState,
        thickness: &[f64],
        twist: &[f64],
        span_offset: f64,
        stride: usize,
    ) -> Result<Vec<SectionPlacement>> {
        let n = self.resolution();
        AeroError::check_len("deflection state", n, state.len())?;
        AeroError::check_len("thickness", n, thickness.len())?;
        AeroError::check_len("twist", n, twist.len())?;
        if stride == 0 {
            return Err(AeroError::config("section stride must be at least 1"));
        }

        let mut stations = (0..n).step_by(stride).collect::<Vec<_>>();
        if stations.last() != Some(&(n - 1)) {
            stations.push(n - 1);
        }

        let deflection = state.deflection();
        let slope = state.slope();

        Ok(stations
            .into_iter()
            .map(|i| SectionPlacement {
                station: i,
                chord: self.chord(i),
                thickness: thickness[i],
                twist: twist[i],
                pitch: slope[i],
                position: Point3::new(
                    self.x_coords()[i] + span_offset,
                    self.upper()[i],
                    deflection[i],
                ),
            })
            .collect())
    }
}

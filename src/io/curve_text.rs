use crate::{AeroError, Point2, Point3, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Meters to inches
pub const INCHES_PER_METER: f64 = 39.3701;

/// How points are re-expressed when written out for an external tool.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExportFrame {
    /// Exchange the y and z coordinates, for tools which treat y as the vertical axis
    pub swap_yz: bool,

    /// Uniform scale applied to every coordinate
    pub scale: f64,
}

impl Default for ExportFrame {
    fn default() -> Self {
        Self {
            swap_yz: false,
            scale: 1.0,
        }
    }
}

impl ExportFrame {
    pub fn new(swap_yz: bool, scale: f64) -> Self {
        Self { swap_yz, scale }
    }

    /// Y-up axes with model units of meters written as inches
    pub fn y_up_inches() -> Self {
        Self::new(true, INCHES_PER_METER)
    }

    pub fn apply(&self, p: &Point3) -> Point3 {
        let p = if self.swap_yz {
            Point3::new(p.x, p.z, p.y)
        } else {
            *p
        };
        p * self.scale
    }
}

/// Parse whitespace delimited profile coordinates, two columns per line, after skipping
/// `header_lines` lines. Blank lines are ignored and any columns after the second are discarded.
///
/// # Arguments
///
/// * `text`: the file contents
/// * `header_lines`: number of lines to skip before reading coordinates
///
/// returns: Result<Vec<OPoint<f64, Const<2>>, Global>, AeroError>
///
/// # Examples
///
/// ```
/// use aerostruct::io::parse_profile_points;
/// let text = "NACA 0012\n1.0 0.0\n0.5  0.06\n\n0.0 0.0\n";
/// let points = parse_profile_points(text, 1).unwrap();
/// assert_eq!(points.len(), 3);
/// assert_eq!(points[1].y, 0.06);
/// ```
pub fn parse_profile_points(text: &str, header_lines: usize) -> Result<Vec<Point2>> {
    let mut points = Vec::new();
    for (i, line) in text.lines().enumerate().skip(header_lines) {
        let mut fields = line.split_whitespace();
        let Some(first) = fields.next() else {
            continue;
        };
        let second = fields.next().ok_or_else(|| AeroError::Parse {
            line: i + 1,
            message: "expected two columns".to_string(),
        })?;

        let parse = |s: &str| {
            s.parse::<f64>().map_err(|e| AeroError::Parse {
                line: i + 1,
                message: format!("'{}': {}", s, e),
            })
        };
        points.push(Point2::new(parse(first)?, parse(second)?));
    }

    Ok(points)
}

pub fn read_profile_points(path: &Path, header_lines: usize) -> Result<Vec<Point2>> {
    let text = std::fs::read_to_string(path)?;
    parse_profile_points(&text, header_lines)
}

/// Write a sequence of points to a tab delimited text file with one x/y/z triplet per line,
/// after passing each point through the export frame.
pub fn write_curve(path: &Path, points: &[Point3], frame: &ExportFrame) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    for point in points {
        let p = frame.apply(point);
        writeln!(writer, "{:.18e}\t{:.18e}\t{:.18e}", p.x, p.y, p.z)?;
    }
    writer.flush()?;

    Ok(())
}

/// Write each curve to its own file named `{prefix}{index}.txt` in `directory`, returning the
/// paths in the same order as the curves.
pub fn write_curves(
    directory: &Path,
    prefix: &str,
    curves: &[Vec<Point3>],
    frame: &ExportFrame,
) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(directory)?;
    let mut paths = Vec::with_capacity(curves.len());
    for (i, curve) in curves.iter().enumerate() {
        let path = directory.join(format!("{}{}.txt", prefix, i));
        write_curve(&path, curve, frame)?;
        paths.push(path);
    }

    info!(
        "Wrote {} curve files with prefix '{}' to {}",
        paths.len(),
        prefix,
        directory.display()
    );

    Ok(paths)
}

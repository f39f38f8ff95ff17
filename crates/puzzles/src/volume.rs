//! 3D printer: total volume of convex polyhedra given by their faces.
//!
//! Each face polygon is fanned into triangles from its first vertex, every
//! triangle is coned to a common apex on the polyhedron, and the resulting
//! tetrahedra are summed. Any apex on a convex polyhedron works because the
//! cones through faces incident to the apex are flat and contribute zero.

use nalgebra::Vector3;

use crate::cfg::VOLUME_DECIMALS;
use crate::input::Tokens;
use crate::problem::SolveError;

/// One polyhedron as its list of face polygons (vertices in boundary order).
#[derive(Clone, Debug, Default)]
pub struct Polyhedron {
    pub faces: Vec<Vec<Vector3<f64>>>,
}

impl Polyhedron {
    /// Volume assuming the polyhedron is convex.
    ///
    /// Err carries the index of the first face with fewer than three vertices.
    pub fn volume(&self) -> Result<f64, usize> {
        if let Some(idx) = self.faces.iter().position(|face| face.len() < 3) {
            return Err(idx);
        }
        let Some(&apex) = self.faces.first().and_then(|f| f.first()) else {
            return Ok(0.0);
        };
        let mut total = 0.0;
        for face in &self.faces {
            let anchor = face[0];
            for k in 2..face.len() {
                total += tetra_volume(apex, anchor, face[k - 1], face[k]);
            }
        }
        Ok(total)
    }
}

/// Unsigned volume of the tetrahedron `abcd`.
pub fn tetra_volume(a: Vector3<f64>, b: Vector3<f64>, c: Vector3<f64>, d: Vector3<f64>) -> f64 {
    let u1 = b - a;
    let u2 = c - a;
    let u3 = d - a;
    (u1.cross(&u2).dot(&u3) / 6.0).abs()
}

/// Parse `N` polyhedra, each `F` faces of `k x1 y1 z1 .. xk yk zk`.
pub fn read_polyhedra(tokens: &mut Tokens<'_>) -> Result<Vec<Polyhedron>, SolveError> {
    let n: usize = tokens.next()?;
    let mut out = Vec::new();
    for _ in 0..n {
        let f: usize = tokens.next()?;
        let mut faces = Vec::new();
        for _ in 0..f {
            let k: usize = tokens.next()?;
            let mut face = Vec::new();
            for _ in 0..k {
                let x: f64 = tokens.next()?;
                let y: f64 = tokens.next()?;
                let z: f64 = tokens.next()?;
                face.push(Vector3::new(x, y, z));
            }
            faces.push(face);
        }
        out.push(Polyhedron { faces });
    }
    Ok(out)
}

pub fn solve(input: &str) -> Result<String, SolveError> {
    let mut tokens = Tokens::new(input);
    let polys = read_polyhedra(&mut tokens)?;
    let mut total = 0.0;
    for (polyhedron, p) in polys.iter().enumerate() {
        total += p
            .volume()
            .map_err(|face| SolveError::DegenerateFace { polyhedron, face })?;
    }
    Ok(format!("{total:.prec$}", prec = VOLUME_DECIMALS))
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNIT_CUBE: &str = "1\n6\n\
        4 0 0 0 1 0 0 1 1 0 0 1 0\n\
        4 0 0 1 1 0 1 1 1 1 0 1 1\n\
        4 0 0 0 1 0 0 1 0 1 0 0 1\n\
        4 0 1 0 1 1 0 1 1 1 0 1 1\n\
        4 0 0 0 0 1 0 0 1 1 0 0 1\n\
        4 1 0 0 1 1 0 1 1 1 1 0 1\n";

    #[test]
    fn tetra_volume_matches_formula() {
        let o = Vector3::zeros();
        let v = tetra_volume(o, Vector3::x(), Vector3::y(), Vector3::z());
        assert!((v - 1.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn unit_cube() {
        assert_eq!(solve(UNIT_CUBE).unwrap(), "1.00");
    }

    #[test]
    fn volumes_add_across_polyhedra() {
        let two = UNIT_CUBE.replacen("1\n", "2\n", 1) + &UNIT_CUBE[2..];
        assert_eq!(solve(&two).unwrap(), "2.00");
    }

    #[test]
    fn corner_simplex_scaled() {
        // Simplex with legs 3: volume 27/6.
        let input = "1\n4\n\
            3 0 0 0 3 0 0 0 3 0\n\
            3 0 0 0 0 3 0 0 0 3\n\
            3 0 0 0 0 0 3 3 0 0\n\
            3 3 0 0 0 3 0 0 0 3\n";
        assert_eq!(solve(input).unwrap(), "4.50");
    }

    #[test]
    fn degenerate_face_is_reported() {
        let input = "1\n2\n3 0 0 0 1 0 0 0 1 0\n2 0 0 0 1 1 1\n";
        assert_eq!(
            solve(input).unwrap_err(),
            SolveError::DegenerateFace {
                polyhedron: 0,
                face: 1
            }
        );
    }

    #[test]
    fn empty_first_face_is_degenerate() {
        let input = "1\n2\n0\n3 0 0 0 1 0 0 0 1 0\n";
        assert_eq!(
            solve(input).unwrap_err(),
            SolveError::DegenerateFace {
                polyhedron: 0,
                face: 0
            }
        );
    }

    #[test]
    fn empty_polyhedron_has_no_volume() {
        assert_eq!(Polyhedron::default().volume(), Ok(0.0));
    }
}

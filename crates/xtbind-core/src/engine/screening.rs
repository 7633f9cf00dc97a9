use crate::core::models::geometry::Geometry;
use crate::engine::compute::ComputeError;
use nalgebra::Vector3;

/// Two nuclei closer than this (in bohr) are treated as fused; no
/// parametrization produces meaningful energies below it.
pub const MIN_NUCLEAR_SEPARATION: f64 = 0.5;

/// Closest pair of atoms found by [`closest_contact`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub first: usize,
    pub second: usize,
    pub separation: f64,
}

/// Finds the closest atom pair in a geometry.
///
/// For periodic directions the search includes the neighboring image cells
/// (all shifts in {-1, 0, 1}), so a pair that only collides across a cell
/// boundary, or an atom colliding with its own image in a tiny cell, is
/// still found. Returns `None` for single-atom molecular input, the only
/// case without any pair.
pub fn closest_contact(geometry: &Geometry) -> Option<Contact> {
    let positions = geometry.positions();
    let lattice = geometry.lattice();
    let periodic = geometry.periodic();

    let mut shifts: Vec<Vector3<f64>> = vec![Vector3::zeros()];
    if let Some(cell) = lattice {
        let range = |p: bool| if p { [-1i32, 0, 1].to_vec() } else { vec![0] };
        shifts.clear();
        for a in range(periodic[0]) {
            for b in range(periodic[1]) {
                for c in range(periodic[2]) {
                    let shift = cell.row(0).transpose() * f64::from(a)
                        + cell.row(1).transpose() * f64::from(b)
                        + cell.row(2).transpose() * f64::from(c);
                    shifts.push(shift);
                }
            }
        }
    }

    let mut closest: Option<Contact> = None;
    for i in 0..positions.len() {
        for j in i..positions.len() {
            for shift in &shifts {
                if i == j && shift.norm_squared() == 0.0 {
                    continue;
                }
                let separation = (positions[j] + *shift - positions[i]).norm();
                if closest.map_or(true, |c| separation < c.separation) {
                    closest = Some(Contact {
                        first: i,
                        second: j,
                        separation,
                    });
                }
            }
        }
    }
    closest
}

/// Rejects geometries whose closest contact falls below
/// [`MIN_NUCLEAR_SEPARATION`].
pub fn screen(geometry: &Geometry) -> Result<(), ComputeError> {
    match closest_contact(geometry) {
        Some(contact) if contact.separation < MIN_NUCLEAR_SEPARATION => {
            Err(ComputeError::NuclearFusion {
                first: contact.first,
                second: contact.second,
                separation: contact.separation,
            })
        }
        _ => Ok(()),
    }
}

use crate::types::{Matrix3, Vector3};

///Denominator of the prime vertical radius of curvature
/// (eccentricity, latitude in radians)
pub fn calc_denom(ecc: f64, lat_rad: f64) -> f64 {
    (1.0 - ecc.powi(2) * lat_rad.sin().powi(2)).sqrt()
}

pub fn mat_vec_mul(m: &Matrix3, v: &Vector3) -> Vector3 {
    let mut out = [0.; 3];
    for (row, o) in m.iter().zip(out.iter_mut()) {
        *o = row[0] * v[0] + row[1] * v[1] + row[2] * v[2];
    }
    out
}

#[cfg(test)]
pub fn assert_almost_eq(a: f64, b: f64, tolerance: f64) {
    if (a - b).abs() > tolerance {
        assert_eq!(a, b)
    }
}

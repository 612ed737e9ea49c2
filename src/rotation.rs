use crate::{
    GroundStation,
    helpers::mat_vec_mul,
    types::{Ecef, Matrix3, Sez},
};

///Latitude rotation (the `R_y` matrix)
pub fn r_y(lat_rad: f64) -> Matrix3 {
    [
        [lat_rad.sin(), 0., -lat_rad.cos()],
        [0., 1., 0.],
        [lat_rad.cos(), 0., lat_rad.sin()],
    ]
}

///Longitude rotation (the `R_z` matrix)
pub fn r_z(lon_rad: f64) -> Matrix3 {
    [
        [lon_rad.cos(), lon_rad.sin(), 0.],
        [-lon_rad.sin(), lon_rad.cos(), 0.],
        [0., 0., 1.],
    ]
}

///Rotate the displacement from the station to `target` into the station's
/// South-East-Zenith frame. Longitude is applied first, then latitude.
pub fn to_sez(station: &GroundStation, target: Ecef) -> Sez {
    let ecef_vector = target - station.position;
    let first_rotation = mat_vec_mul(&r_z(station.lon_rad), &ecef_vector);
    let second_rotation = mat_vec_mul(&r_y(station.lat_rad), &first_rotation);
    Sez::from(second_rotation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::assert_almost_eq;
    use crate::types::R_E_KM;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_matrices_at_zero() {
        assert_eq!(r_z(0.), [[1., 0., 0.], [0., 1., 0.], [0., 0., 1.]]);
        assert_eq!(r_y(0.), [[0., 0., -1.], [0., 1., 0.], [1., 0., 0.]]);
    }

    #[test]
    fn test_matrices_are_orthonormal() {
        for angle in [-2.1, -0.4, 0.3, 1.1, 2.9] {
            for m in [r_y(angle), r_z(angle)] {
                for i in 0..3 {
                    for j in 0..3 {
                        let dot: f64 = (0..3).map(|k| m[i][k] * m[j][k]).sum();
                        let expected = if i == j { 1. } else { 0. };
                        assert_almost_eq(dot, expected, 1e-15);
                    }
                }
            }
        }
    }

    #[test]
    fn test_zenith_on_equator() {
        let gs = GroundStation::from_ecef(Ecef::new(R_E_KM, 0., 0.));
        let sez = to_sez(&gs, Ecef::new(R_E_KM + 100., 0., 0.));
        assert_almost_eq(sez.s_km, 0., 1e-6);
        assert_almost_eq(sez.e_km, 0., 1e-6);
        assert_almost_eq(sez.z_km, 100., 1e-6);
    }

    #[test]
    fn test_north_is_negative_south() {
        let gs = GroundStation::from_ecef(Ecef::new(R_E_KM, 0., 0.));
        let sez = to_sez(&gs, Ecef::new(R_E_KM, 0., 100.));
        assert_almost_eq(sez.s_km, -100., 1e-6);
        assert_almost_eq(sez.e_km, 0., 1e-6);
        assert_almost_eq(sez.z_km, 0., 1e-6);
    }

    #[test]
    fn test_east_at_ninety_degrees() {
        //East of a station at 90 deg longitude is ECEF -x
        let gs = GroundStation::from_ecef(Ecef::new(0., R_E_KM, 0.));
        assert_almost_eq(gs.lon_rad, FRAC_PI_2, 1e-15);
        let sez = to_sez(&gs, Ecef::new(-50., R_E_KM, 0.));
        assert_almost_eq(sez.s_km, 0., 1e-9);
        assert_almost_eq(sez.e_km, 50., 1e-9);
        assert_almost_eq(sez.z_km, 0., 1e-9);
    }
}

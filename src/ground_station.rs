use serde::{Deserialize, Serialize};

use crate::helpers::calc_denom;
use crate::types::{E_E, Ecef, R_E_KM};

pub const MAX_LAT_ITERATIONS: u32 = 5;
pub const LAT_TOLERANCE_RAD: f64 = 1e-6;

///Observer with geodetic coordinates derived from its ECEF position
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GroundStation {
    pub position: Ecef,
    pub lat_rad: f64,
    pub lon_rad: f64,
    pub hae_km: f64,
    ///Latitude refinement passes actually run, 1..=MAX_LAT_ITERATIONS
    pub iterations: u32,
}

impl GroundStation {
    ///Longitude is a direct arctangent, latitude is refined by fixed-point
    /// iteration starting from the geocentric latitude.
    ///
    /// The iteration stops after MAX_LAT_ITERATIONS passes whether or not it
    /// converged. Nothing is guarded: on the polar axis the division by
    /// `r_lon_km` goes to infinity, and at the Earth's center latitude and HAE are NaN.
    pub fn from_ecef(position: Ecef) -> GroundStation {
        let Ecef { x, y, z } = position;
        let lon_rad = y.atan2(x);
        let mut lat_rad = (z / (x.powi(2) + y.powi(2) + z.powi(2)).sqrt()).asin();
        let r_lon_km = (x.powi(2) + y.powi(2)).sqrt();

        let mut prev_lat_rad = f64::NAN;
        let mut c_e = f64::NAN;
        let mut iterations = 0;
        while (prev_lat_rad.is_nan() || (lat_rad - prev_lat_rad).abs() > LAT_TOLERANCE_RAD)
            && iterations < MAX_LAT_ITERATIONS
        {
            let denom = calc_denom(E_E, lat_rad);
            c_e = R_E_KM / denom;
            prev_lat_rad = lat_rad;
            lat_rad = ((z + c_e * E_E.powi(2) * lat_rad.sin()) / r_lon_km).atan();
            iterations += 1;
        }

        let hae_km = r_lon_km / lat_rad.cos() - c_e;
        GroundStation {
            position,
            lat_rad,
            lon_rad,
            hae_km,
            iterations,
        }
    }
}

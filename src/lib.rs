//! Converts an ECEF position into topocentric South-East-Zenith (SEZ)
//! coordinates relative to an observer, also given in ECEF.
//!
//! The observer's geodetic latitude and longitude are derived on the
//! WGS-84 ellipsoid, then the displacement to the target is rotated by
//! longitude and then by latitude.

pub use error::{Result, SezError};
pub use ground_station::GroundStation;
pub use types::{E_E, Ecef, Matrix3, R_E_KM, Sez, Vector3};
mod error;
pub mod ground_station;
mod helpers;
pub mod rotation;
mod types;

pub use helpers::calc_denom;

pub const USAGE: &str = "Usage: ecef_to_sez o_x_km o_y_km o_z_km x_km y_km z_km";

///SEZ coordinates of `target` as seen from `observer`, all in km
pub fn ecef_to_sez(observer: Ecef, target: Ecef) -> Sez {
    let station = GroundStation::from_ecef(observer);
    rotation::to_sez(&station, target)
}

///Parses the six positional values into (observer, target).
///
/// Returns `Ok(None)` when the count is not six, before looking at any value.
pub fn parse_args<S: AsRef<str>>(args: &[S]) -> Result<Option<(Ecef, Ecef)>> {
    if args.len() != 6 {
        return Ok(None);
    }
    let mut values = [0.; 6];
    for (arg, value) in args.iter().zip(values.iter_mut()) {
        let arg = arg.as_ref();
        *value = arg.trim().parse().map_err(|source| SezError::InvalidNumber {
            value: arg.to_string(),
            source,
        })?;
    }
    let [o_x_km, o_y_km, o_z_km, x_km, y_km, z_km] = values;
    Ok(Some((
        Ecef::new(o_x_km, o_y_km, o_z_km),
        Ecef::new(x_km, y_km, z_km),
    )))
}

use std::ops::Sub;

use serde::{Deserialize, Serialize};

pub const R_E_KM: f64 = 6378.137; //WGS-84 equatorial radius
pub const E_E: f64 = 0.081819221456; //WGS-84 eccentricity

pub type Vector3 = [f64; 3];
pub type Matrix3 = [[f64; 3]; 3];

///Cartesian position in the Earth-Centered-Earth-Fixed frame, km
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ecef {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Ecef {
    pub fn new(x: f64, y: f64, z: f64) -> Ecef {
        Ecef { x, y, z }
    }
}

impl Sub for Ecef {
    type Output = Vector3;
    fn sub(self, rhs: Ecef) -> Vector3 {
        [self.x - rhs.x, self.y - rhs.y, self.z - rhs.z]
    }
}

///Topocentric South-East-Zenith vector, km
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sez {
    pub s_km: f64,
    pub e_km: f64,
    pub z_km: f64,
}

impl From<Vector3> for Sez {
    fn from(v: Vector3) -> Sez {
        Sez {
            s_km: v[0],
            e_km: v[1],
            z_km: v[2],
        }
    }
}

//! Serialize complex points as `[x, y]` pairs.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::C64;

pub(crate) mod point {
    use super::*;

    pub fn serialize<S: Serializer>(z: &C64, s: S) -> Result<S::Ok, S::Error> {
        [z.re, z.im].serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<C64, D::Error> {
        let [x, y] = <[f64; 2]>::deserialize(d)?;
        Ok(C64::new(x, y))
    }
}

pub(crate) mod points {
    use super::*;

    pub fn serialize<S: Serializer>(zs: &[C64], s: S) -> Result<S::Ok, S::Error> {
        s.collect_seq(zs.iter().map(|z| [z.re, z.im]))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<C64>, D::Error> {
        let xy = Vec::<[f64; 2]>::deserialize(d)?;
        Ok(xy.into_iter().map(|[x, y]| C64::new(x, y)).collect())
    }
}

//! Planet map supplied by an external ephemeris.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::body::WesternBody;
use crate::sign::ZodiacSign;

/// Position of one body. `sign` is optional; resonances need it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanetPosition {
    /// Tropical ecliptic longitude in degrees.
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sign: Option<ZodiacSign>,
}

impl PlanetPosition {
    pub const fn new(longitude: f64) -> Self {
        Self {
            longitude,
            sign: None,
        }
    }

    pub const fn with_sign(longitude: f64, sign: ZodiacSign) -> Self {
        Self {
            longitude,
            sign: Some(sign),
        }
    }

    /// Copy with `sign` derived from the longitude when absent.
    pub fn with_derived_sign(self) -> Self {
        Self {
            sign: self.sign.or(Some(ZodiacSign::from_longitude(self.longitude))),
            ..self
        }
    }
}

/// Body name → position. Unknown names are dropped on deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, PlanetPosition>")]
pub struct Planets(BTreeMap<WesternBody, PlanetPosition>);

impl Planets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, body: WesternBody, position: PlanetPosition) -> Option<PlanetPosition> {
        self.0.insert(body, position)
    }

    pub fn get(&self, body: WesternBody) -> Option<&PlanetPosition> {
        self.0.get(&body)
    }

    pub fn iter(&self) -> impl Iterator<Item = (WesternBody, &PlanetPosition)> {
        self.0.iter().map(|(b, p)| (*b, p))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Fill every missing sign from its longitude.
    pub fn with_derived_signs(&self) -> Self {
        Self(
            self.0
                .iter()
                .map(|(b, p)| (*b, p.with_derived_sign()))
                .collect(),
        )
    }
}

impl From<BTreeMap<String, PlanetPosition>> for Planets {
    fn from(raw: BTreeMap<String, PlanetPosition>) -> Self {
        let mut planets = Self::new();
        for (name, position) in raw {
            match name.parse::<WesternBody>() {
                Ok(body) => {
                    planets.insert(body, position);
                }
                Err(_) => tracing::debug!(body = %name, "ignoring unrecognized body"),
            }
        }
        planets
    }
}

impl FromIterator<(WesternBody, PlanetPosition)> for Planets {
    fn from_iter<I: IntoIterator<Item = (WesternBody, PlanetPosition)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

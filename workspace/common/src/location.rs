//! The fixed city catalogue and the `"lat,lon"` encoding carried by the
//! selection control.

use std::fmt;
use std::str::FromStr;

use crate::FetchError;

/// A selectable city.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

/// Every city offered by the page, in display order.
pub static CITIES: [Location; 10] = [
    Location::new("Rome", 41.90, 12.48),
    Location::new("Milan", 45.46, 9.19),
    Location::new("Naples", 40.85, 14.27),
    Location::new("Florence", 43.77, 11.25),
    Location::new("Venice", 45.44, 12.33),
    Location::new("Turin", 45.07, 7.69),
    Location::new("Bologna", 44.50, 11.34),
    Location::new("Genoa", 44.41, 8.93),
    Location::new("Palermo", 38.11, 13.36),
    Location::new("Bari", 41.11, 16.87),
];

impl Location {
    pub const fn new(name: &'static str, latitude: f64, longitude: f64) -> Self {
        Self {
            name,
            latitude,
            longitude,
        }
    }

    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }

    /// Value stored on this city's `<option>`.
    pub fn option_value(&self) -> String {
        self.coordinates().to_string()
    }

    /// Finds the catalogue entry with exactly these coordinates.
    pub fn lookup(coordinates: &Coordinates) -> Option<&'static Location> {
        CITIES
            .iter()
            .find(|city| city.coordinates() == *coordinates)
    }
}

/// Latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

impl FromStr for Coordinates {
    type Err = FetchError;

    /// Parses a selection value. An empty value means nothing is selected.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        if value.is_empty() {
            return Err(FetchError::NoSelection);
        }

        let parsed = value.split_once(',').and_then(|(latitude, longitude)| {
            Some(Coordinates {
                latitude: latitude.trim().parse().ok()?,
                longitude: longitude.trim().parse().ok()?,
            })
        });

        parsed.ok_or_else(|| {
            tracing::warn!("Unrecognised selection value: {:?}", value);
            FetchError::NoSelection
        })
    }
}

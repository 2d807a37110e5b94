use serde::{Deserialize, Serialize};

/// A bookable ground with separate hourly rates for daytime and
/// floodlit play.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ground {
    pub id: u32,
    pub name: String,
    pub city: String,
    /// Hourly rate when floodlights are required.
    pub rate_with_lights: Option<f64>,
    /// Hourly rate for daytime bookings.
    pub rate_without_lights: Option<f64>,
}

impl Ground {
    pub fn new(id: u32, name: String, city: String) -> Self {
        Ground {
            id,
            name,
            city,
            rate_with_lights: None,
            rate_without_lights: None,
        }
    }

    /// Hourly rate for the given lighting requirement.
    ///
    /// A stored rate of zero (or less) means the rate was never configured,
    /// so it is reported as absent rather than treated as a valid price.
    pub fn rate(&self, with_lights: bool) -> Option<f64> {
        let rate = if with_lights {
            self.rate_with_lights
        } else {
            self.rate_without_lights
        };

        rate.filter(|r| *r > 0.0)
    }
}

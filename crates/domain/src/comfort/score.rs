use crate::Observation;

const TEMPERATURE_MAX: f64 = 40.0;
const TEMPERATURE_BAND: (f64, f64) = (22.0, 26.0);
const TEMPERATURE_PENALTY: f64 = 4.0;

const HUMIDITY_MAX: f64 = 25.0;
const HUMIDITY_BAND: (f64, f64) = (40.0, 60.0);
const HUMIDITY_PENALTY: f64 = 1.0;

const WIND_MAX: f64 = 20.0;
const WIND_BAND: (f64, f64) = (1.0, 5.0);
const WIND_CALM_PENALTY: f64 = 5.0;
const WIND_GUST_PENALTY: f64 = 4.0;

const CLOUD_MAX: f64 = 15.0;
const CLOUD_THRESHOLD: f64 = 50.0;
const CLOUD_PENALTY: f64 = 0.3;

const SCORE_CAP: f64 = 100.0;

/// Per-factor contributions to a comfort score, each already floored at 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComfortBreakdown {
    pub temperature: f64,
    pub humidity: f64,
    pub wind: f64,
    pub cloudiness: f64,
}

impl ComfortBreakdown {
    pub fn of(observation: &Observation) -> Self {
        Self {
            temperature: temperature_points(observation.temperature),
            humidity: humidity_points(f64::from(observation.humidity)),
            wind: wind_points(observation.wind_speed),
            cloudiness: cloud_points(f64::from(observation.cloudiness)),
        }
    }

    pub fn total(&self) -> f64 {
        self.temperature + self.humidity + self.wind + self.cloudiness
    }

    /// Caps the total at 100 and rounds half away from zero.
    pub fn score(&self) -> u8 {
        let capped = self.total().clamp(0.0, SCORE_CAP);
        capped.round() as u8
    }
}

/// Comfort index in `0..=100` for one observation.
///
/// Deterministic: identical attributes always produce the identical score.
pub fn comfort_score(observation: &Observation) -> u8 {
    ComfortBreakdown::of(observation).score()
}

fn distance_outside(value: f64, (low, high): (f64, f64)) -> f64 {
    if value < low {
        low - value
    } else if value > high {
        value - high
    } else {
        0.0
    }
}

fn temperature_points(celsius: f64) -> f64 {
    let distance = distance_outside(celsius, TEMPERATURE_BAND);
    (TEMPERATURE_MAX - TEMPERATURE_PENALTY * distance).max(0.0)
}

fn humidity_points(percent: f64) -> f64 {
    let distance = distance_outside(percent, HUMIDITY_BAND);
    (HUMIDITY_MAX - HUMIDITY_PENALTY * distance).max(0.0)
}

fn wind_points(speed: f64) -> f64 {
    let (calm, gusty) = WIND_BAND;
    let points = if speed < calm {
        WIND_MAX - WIND_CALM_PENALTY * (calm - speed)
    } else if speed > gusty {
        WIND_MAX - WIND_GUST_PENALTY * (speed - gusty)
    } else {
        WIND_MAX
    };
    points.max(0.0)
}

fn cloud_points(percent: f64) -> f64 {
    if percent <= CLOUD_THRESHOLD {
        CLOUD_MAX
    } else {
        (CLOUD_MAX - CLOUD_PENALTY * (percent - CLOUD_THRESHOLD)).max(0.0)
    }
}

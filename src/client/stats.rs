use super::Reading;

/// Summary figures over the readings loaded so far.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReadingStats {
    /// Newest reading's temperature
    pub current: f64,
    /// Mean, rounded to one decimal place
    pub average: f64,
    pub max: f64,
    pub min: f64,
    pub count: usize,
}

impl ReadingStats {
    /// Readings must be newest first, as the API returns them.
    /// Returns `None` when there is nothing to summarize.
    pub fn from_readings<'a, I>(readings: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Reading>,
    {
        let mut iter = readings.into_iter();
        let first = iter.next()?.temperature_c;

        let mut stats = Self {
            current: first,
            average: 0.0,
            max: first,
            min: first,
            count: 1,
        };
        let mut sum = first;

        for reading in iter {
            let t = reading.temperature_c;
            sum += t;
            stats.max = stats.max.max(t);
            stats.min = stats.min.min(t);
            stats.count += 1;
        }

        let mean = sum / stats.count as f64;
        stats.average = (mean * 10.0).round() / 10.0;

        Some(stats)
    }
}

/// Coarse comfort bucket used for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureBand {
    Freezing,
    Cold,
    Comfortable,
    Warm,
    Hot,
}

impl TemperatureBand {
    #[must_use]
    pub fn classify(temperature_c: f64) -> Self {
        if temperature_c < 0.0 {
            Self::Freezing
        } else if temperature_c < 15.0 {
            Self::Cold
        } else if temperature_c < 25.0 {
            Self::Comfortable
        } else if temperature_c < 35.0 {
            Self::Warm
        } else {
            Self::Hot
        }
    }
}

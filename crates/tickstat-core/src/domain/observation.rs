use serde::{Deserialize, Serialize};

use crate::Instrument;

/// A single price observed for an instrument on a date.
///
/// The date is an opaque label. Collections order observations by comparing
/// labels as strings, so labels should be zero-padded ISO-8601 (`YYYY-MM-DD`)
/// for that order to be chronological.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PriceObservation {
    instrument: Instrument,
    price: i64,
    date: String,
}

impl PriceObservation {
    pub fn new(instrument: Instrument, price: i64, date: impl Into<String>) -> Self {
        Self {
            instrument,
            price,
            date: date.into(),
        }
    }

    pub fn instrument(&self) -> &Instrument {
        &self.instrument
    }

    pub fn price(&self) -> i64 {
        self.price
    }

    pub fn date(&self) -> &str {
        &self.date
    }
}

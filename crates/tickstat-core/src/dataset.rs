//! JSON documents describing one instrument and its observations.
//!
//! ```json
//! {
//!   "instrument": { "symbol": "AAPL", "name": "Apple Inc." },
//!   "observations": [
//!     { "price": 110, "date": "2023-06-29" },
//!     { "price": 95, "date": "2023-06-30", "instrument": { "symbol": "MSFT", "name": "Microsoft" } }
//!   ]
//! }
//! ```
//!
//! Entries without an `instrument` belong to the document's instrument. Entries
//! that name one go through the same check as [`ObservationCollection::add`].

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{CollectionError, CoreError, Instrument, ObservationCollection, PriceObservation};

/// How a load treats entries whose instrument differs from the document's.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MismatchPolicy {
    /// Abort the load on the first foreign entry.
    #[default]
    Reject,
    /// Leave foreign entries out and report them.
    Skip,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservationEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instrument: Option<Instrument>,
    pub price: i64,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservationDataset {
    pub instrument: Instrument,
    #[serde(default)]
    pub observations: Vec<ObservationEntry>,
}

/// Entry left out of a load under [`MismatchPolicy::Skip`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedObservation {
    /// Position of the entry in the document's `observations` list.
    pub index: usize,
    pub instrument: Instrument,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadReport {
    pub collection: ObservationCollection,
    pub skipped: Vec<SkippedObservation>,
}

impl ObservationDataset {
    pub fn from_json_str(input: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CoreError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, CoreError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn into_collection(self, policy: MismatchPolicy) -> Result<LoadReport, CollectionError> {
        let Self {
            instrument,
            observations,
        } = self;

        let mut collection = ObservationCollection::new(instrument);
        let mut skipped = Vec::new();

        for (index, entry) in observations.into_iter().enumerate() {
            let owner = entry
                .instrument
                .unwrap_or_else(|| collection.instrument().clone());
            let observation = PriceObservation::new(owner, entry.price, entry.date);

            match collection.add(observation) {
                Ok(()) => {}
                Err(CollectionError::InstrumentMismatch { found, .. })
                    if policy == MismatchPolicy::Skip =>
                {
                    warn!(index, found = %found, "skipping observation for foreign instrument");
                    skipped.push(SkippedObservation {
                        index,
                        instrument: found,
                    });
                }
                Err(error) => return Err(error),
            }
        }

        debug!(
            symbol = collection.instrument().symbol(),
            loaded = collection.len(),
            skipped = skipped.len(),
            "dataset loaded"
        );

        Ok(LoadReport {
            collection,
            skipped,
        })
    }
}

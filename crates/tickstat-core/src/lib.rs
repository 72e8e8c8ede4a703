//! # Tickstat Core
//!
//! In-memory analytics over dated price observations of one instrument.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`domain`] | Instrument identity, price observation, UTC timestamp |
//! | [`collection`] | Append-only observation collection and its aggregate queries |
//! | [`summary`] | Serializable snapshot of every aggregate |
//! | [`dataset`] | JSON dataset loading with a mismatch policy |
//! | [`envelope`] | Output envelope with request metadata |
//! | [`error`] | Core error types |
//!
//! ## Quick Start
//!
//! ```rust
//! use tickstat_core::{Instrument, ObservationCollection, PriceObservation};
//!
//! let apple = Instrument::new("AAPL", "Apple Inc.");
//! let mut collection = ObservationCollection::new(apple.clone());
//!
//! collection.add(PriceObservation::new(apple.clone(), 110, "2023-06-29"))?;
//! collection.add(PriceObservation::new(apple.clone(), 90, "2023-06-25"))?;
//!
//! assert_eq!(collection.max_price(), Some(110));
//! let change = collection.biggest_change().expect("two observations");
//! assert_eq!(change.amount, 20);
//! assert_eq!(change.start_date, "2023-06-25");
//! # Ok::<(), tickstat_core::CollectionError>(())
//! ```
//!
//! ## Date ordering
//!
//! Dates are labels compared as strings. Zero-padded ISO-8601 dates sort
//! chronologically; formats such as `DD-MM-YYYY` do not, and the aggregates
//! will follow the string order regardless.
//!
//! Labels compare by UTF-8 bytes. That matches UTF-16 code unit order except
//! between a character in U+E000..=U+FFFF and one above U+FFFF, where UTF-16
//! sorts the supplementary character first and UTF-8 sorts it last.
//!
//! ## Logging
//!
//! The crate emits `tracing` events and never installs a subscriber.

pub mod collection;
pub mod dataset;
pub mod domain;
pub mod envelope;
pub mod error;
pub mod summary;

pub use collection::{ChangeDirection, DateSpan, ObservationCollection, PriceChange};
pub use dataset::{
    LoadReport, MismatchPolicy, ObservationDataset, ObservationEntry, SkippedObservation,
};
pub use domain::{Instrument, PriceObservation, UtcDateTime};
pub use envelope::{Envelope, EnvelopeMeta};
pub use error::{CollectionError, CoreError, ValidationError};
pub use summary::CollectionSummary;

//! # Domain Models
//!
//! Value types shared by every layer of tickstat.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Instrument`] | Instrument identity (symbol and display name) |
//! | [`PriceObservation`] | One integer price for an instrument on a date label |
//! | [`UtcDateTime`] | UTC timestamp used in envelope metadata |
//!
//! None of the observation types validate their contents. An observation with a
//! negative price or an empty date is a legal value; the collection decides what
//! belongs together by comparing instruments.

mod instrument;
mod observation;
mod timestamp;

pub use instrument::Instrument;
pub use observation::PriceObservation;
pub use timestamp::UtcDateTime;

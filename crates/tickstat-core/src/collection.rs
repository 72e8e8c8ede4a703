//! Append-only collection of price observations for a single instrument.
//!
//! Aggregate queries return `None` instead of sentinel prices when there is
//! not enough data, so a genuine price of `-1` is never confused with "empty".

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{CollectionError, CollectionSummary, Instrument, PriceObservation};

/// Sign of the price move between two adjacent observations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeDirection {
    Up,
    Down,
    Flat,
}

impl ChangeDirection {
    fn between(from: i64, to: i64) -> Self {
        match to.cmp(&from) {
            Ordering::Greater => Self::Up,
            Ordering::Less => Self::Down,
            Ordering::Equal => Self::Flat,
        }
    }
}

/// Largest absolute move between chronologically adjacent observations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PriceChange {
    /// Absolute size of the move.
    pub amount: u64,
    pub start_date: String,
    pub end_date: String,
    pub direction: ChangeDirection,
}

/// Lexicographically earliest and latest date labels in a collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateSpan {
    pub first: String,
    pub last: String,
}

/// Observations of one instrument, kept in arrival order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObservationCollection {
    instrument: Instrument,
    records: Vec<PriceObservation>,
}

impl ObservationCollection {
    pub fn new(instrument: Instrument) -> Self {
        Self {
            instrument,
            records: Vec::new(),
        }
    }

    /// Builds a collection by adding `observations` in order, stopping at the
    /// first one that belongs to another instrument.
    pub fn from_observations<I>(
        instrument: Instrument,
        observations: I,
    ) -> Result<Self, CollectionError>
    where
        I: IntoIterator<Item = PriceObservation>,
    {
        let mut collection = Self::new(instrument);
        for observation in observations {
            collection.add(observation)?;
        }
        Ok(collection)
    }

    pub fn instrument(&self) -> &Instrument {
        &self.instrument
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[PriceObservation] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PriceObservation> {
        self.records.iter()
    }

    /// Appends `observation` unless its instrument differs from the bound one.
    ///
    /// A rejected observation leaves the collection untouched.
    pub fn add(&mut self, observation: PriceObservation) -> Result<(), CollectionError> {
        if observation.instrument() != &self.instrument {
            debug!(
                expected = %self.instrument,
                found = %observation.instrument(),
                "rejected observation for foreign instrument"
            );
            return Err(CollectionError::InstrumentMismatch {
                expected: self.instrument.clone(),
                found: observation.instrument().clone(),
            });
        }

        debug!(
            symbol = self.instrument.symbol(),
            price = observation.price(),
            date = observation.date(),
            "added observation"
        );
        self.records.push(observation);
        Ok(())
    }

    pub fn max_price(&self) -> Option<i64> {
        self.records.iter().map(PriceObservation::price).max()
    }

    pub fn min_price(&self) -> Option<i64> {
        self.records.iter().map(PriceObservation::price).min()
    }

    /// Arithmetic mean of all prices.
    pub fn avg_price(&self) -> Option<f64> {
        if self.records.is_empty() {
            return None;
        }

        let total: i128 = self
            .records
            .iter()
            .map(|record| i128::from(record.price()))
            .sum();
        Some(total as f64 / self.records.len() as f64)
    }

    /// Largest absolute price move between neighbours once records are ordered
    /// by date label.
    ///
    /// Records sharing a date keep their insertion order. On equal moves the
    /// earliest pair wins.
    pub fn biggest_change(&self) -> Option<PriceChange> {
        if self.records.len() < 2 {
            return None;
        }

        let mut sorted: Vec<&PriceObservation> = self.records.iter().collect();
        sorted.sort_by(|a, b| a.date().cmp(b.date()));

        let mut best: Option<PriceChange> = None;
        for pair in sorted.windows(2) {
            let (prev, curr) = (pair[0], pair[1]);
            let amount = curr.price().abs_diff(prev.price());

            if best.as_ref().is_some_and(|best| amount <= best.amount) {
                continue;
            }

            best = Some(PriceChange {
                amount,
                start_date: prev.date().to_owned(),
                end_date: curr.date().to_owned(),
                direction: ChangeDirection::between(prev.price(), curr.price()),
            });
        }

        best
    }

    pub fn date_span(&self) -> Option<DateSpan> {
        let first = self.records.iter().map(PriceObservation::date).min()?;
        let last = self.records.iter().map(PriceObservation::date).max()?;

        Some(DateSpan {
            first: first.to_owned(),
            last: last.to_owned(),
        })
    }

    pub fn summary(&self) -> CollectionSummary {
        CollectionSummary {
            instrument: self.instrument.clone(),
            observations: self.len(),
            min_price: self.min_price(),
            max_price: self.max_price(),
            avg_price: self.avg_price(),
            biggest_change: self.biggest_change(),
            date_span: self.date_span(),
        }
    }
}

impl<'a> IntoIterator for &'a ObservationCollection {
    type Item = &'a PriceObservation;
    type IntoIter = std::slice::Iter<'a, PriceObservation>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apple() -> Instrument {
        Instrument::new("AAPL", "Apple Inc.")
    }

    fn collection_of(prices: &[(i64, &str)]) -> ObservationCollection {
        ObservationCollection::from_observations(
            apple(),
            prices
                .iter()
                .map(|(price, date)| PriceObservation::new(apple(), *price, *date)),
        )
        .expect("all observations share the instrument")
    }

    #[test]
    fn empty_collection_has_no_aggregates() {
        let collection = ObservationCollection::new(apple());

        assert_eq!(collection.len(), 0);
        assert!(collection.is_empty());
        assert_eq!(collection.max_price(), None);
        assert_eq!(collection.min_price(), None);
        assert_eq!(collection.avg_price(), None);
        assert_eq!(collection.biggest_change(), None);
        assert_eq!(collection.date_span(), None);
    }

    #[test]
    fn single_record_aggregates_to_itself() {
        let collection = collection_of(&[(42, "2023-07-01")]);

        assert_eq!(collection.max_price(), Some(42));
        assert_eq!(collection.min_price(), Some(42));
        assert_eq!(collection.avg_price(), Some(42.0));
        assert_eq!(collection.biggest_change(), None);
    }

    #[test]
    fn rejects_foreign_instrument_without_changing_records() {
        let mut collection = collection_of(&[(110, "2023-06-29")]);
        let before = collection.records().to_vec();

        let err = collection
            .add(PriceObservation::new(
                Instrument::new("AAPL", "Apple"),
                500,
                "2023-06-30",
            ))
            .expect_err("must reject");

        assert!(matches!(err, CollectionError::InstrumentMismatch { .. }));
        assert_eq!(collection.len(), 1);
        assert_eq!(collection.records(), before.as_slice());
    }

    #[test]
    fn keeps_arrival_order() {
        let collection = collection_of(&[(3, "2023-07-03"), (1, "2023-07-01"), (2, "2023-07-02")]);
        let dates: Vec<&str> = collection.iter().map(PriceObservation::date).collect();

        assert_eq!(dates, vec!["2023-07-03", "2023-07-01", "2023-07-02"]);
    }

    #[test]
    fn averages_with_floating_division() {
        let collection = collection_of(&[(1, "2023-07-01"), (2, "2023-07-02")]);
        assert_eq!(collection.avg_price(), Some(1.5));
    }

    #[test]
    fn average_survives_extreme_prices() {
        let collection = collection_of(&[(i64::MAX, "2023-07-01"), (i64::MAX, "2023-07-02")]);
        assert_eq!(collection.avg_price(), Some(i64::MAX as f64));
    }

    #[test]
    fn two_records_form_the_only_pair() {
        let collection = collection_of(&[(120, "2023-07-02"), (100, "2023-07-01")]);

        let change = collection.biggest_change().expect("two records");
        assert_eq!(change.amount, 20);
        assert_eq!(change.start_date, "2023-07-01");
        assert_eq!(change.end_date, "2023-07-02");
        assert_eq!(change.direction, ChangeDirection::Up);
    }

    #[test]
    fn reports_absolute_size_of_a_drop() {
        let collection = collection_of(&[
            (100, "2023-07-01"),
            (70, "2023-07-02"),
            (75, "2023-07-03"),
        ]);

        let change = collection.biggest_change().expect("enough records");
        assert_eq!(change.amount, 30);
        assert_eq!(change.direction, ChangeDirection::Down);
    }

    #[test]
    fn ties_keep_the_earliest_pair() {
        let collection = collection_of(&[
            (10, "2023-07-01"),
            (15, "2023-07-02"),
            (10, "2023-07-03"),
        ]);

        let change = collection.biggest_change().expect("enough records");
        assert_eq!(change.amount, 5);
        assert_eq!(change.start_date, "2023-07-01");
        assert_eq!(change.end_date, "2023-07-02");
    }

    #[test]
    fn flat_prices_report_first_pair() {
        let collection = collection_of(&[(7, "2023-07-03"), (7, "2023-07-01"), (7, "2023-07-02")]);

        let change = collection.biggest_change().expect("enough records");
        assert_eq!(change.amount, 0);
        assert_eq!(change.start_date, "2023-07-01");
        assert_eq!(change.end_date, "2023-07-02");
        assert_eq!(change.direction, ChangeDirection::Flat);
    }

    #[test]
    fn equal_dates_keep_insertion_order() {
        let collection = collection_of(&[
            (50, "2023-07-01"),
            (10, "2023-07-01"),
            (12, "2023-07-02"),
        ]);

        let change = collection.biggest_change().expect("enough records");
        assert_eq!(change.amount, 40);
        assert_eq!(change.start_date, "2023-07-01");
        assert_eq!(change.end_date, "2023-07-01");
        assert_eq!(change.direction, ChangeDirection::Down);
    }

    #[test]
    fn change_is_exact_across_the_full_price_range() {
        let collection = collection_of(&[(i64::MIN, "2023-07-01"), (i64::MAX, "2023-07-02")]);

        let change = collection.biggest_change().expect("two records");
        assert_eq!(change.amount, u64::MAX);
    }

    #[test]
    fn biggest_change_does_not_reorder_records() {
        let collection = collection_of(&[(2, "2023-07-02"), (1, "2023-07-01")]);
        let _ = collection.biggest_change();

        assert_eq!(collection.records()[0].date(), "2023-07-02");
    }

    #[test]
    fn labels_order_by_utf8_bytes() {
        let collection = collection_of(&[(1, "\u{1F600}"), (9, "\u{FFFD}")]);

        let change = collection.biggest_change().expect("two records");
        assert_eq!(change.start_date, "\u{FFFD}");
        assert_eq!(change.end_date, "\u{1F600}");
    }

    #[test]
    fn date_span_uses_label_order() {
        let collection = collection_of(&[(1, "2023-07-02"), (2, "2023-06-30"), (3, "2023-07-10")]);

        let span = collection.date_span().expect("non-empty");
        assert_eq!(span.first, "2023-06-30");
        assert_eq!(span.last, "2023-07-10");
    }
}

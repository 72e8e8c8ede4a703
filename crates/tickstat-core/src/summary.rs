use serde::{Deserialize, Serialize};

use crate::{DateSpan, Instrument, PriceChange};

/// Every aggregate of a collection captured at one point in time.
///
/// Absent aggregates serialize as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionSummary {
    pub instrument: Instrument,
    pub observations: usize,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub avg_price: Option<f64>,
    pub biggest_change: Option<PriceChange>,
    pub date_span: Option<DateSpan>,
}

#[cfg(test)]
mod tests {
    use crate::{Instrument, ObservationCollection, PriceObservation};

    #[test]
    fn empty_summary_serializes_nulls() {
        let collection = ObservationCollection::new(Instrument::new("AAPL", "Apple Inc."));
        let value = serde_json::to_value(collection.summary()).expect("serialize");

        assert_eq!(value["observations"], 0);
        assert!(value["min_price"].is_null());
        assert!(value["max_price"].is_null());
        assert!(value["avg_price"].is_null());
        assert!(value["biggest_change"].is_null());
        assert!(value["date_span"].is_null());
    }

    #[test]
    fn summary_matches_individual_queries() {
        let apple = Instrument::new("AAPL", "Apple Inc.");
        let collection = ObservationCollection::from_observations(
            apple.clone(),
            vec![
                PriceObservation::new(apple.clone(), 110, "2023-06-29"),
                PriceObservation::new(apple.clone(), 90, "2023-06-25"),
            ],
        )
        .expect("same instrument");

        let summary = collection.summary();
        assert_eq!(summary.instrument, apple);
        assert_eq!(summary.observations, 2);
        assert_eq!(summary.min_price, collection.min_price());
        assert_eq!(summary.max_price, collection.max_price());
        assert_eq!(summary.avg_price, collection.avg_price());
        assert_eq!(summary.biggest_change, collection.biggest_change());
        assert_eq!(summary, collection.summary());

        let value = serde_json::to_value(&summary).expect("serialize");
        assert_eq!(value["biggest_change"]["amount"], 20);
        assert_eq!(value["biggest_change"]["direction"], "up");
    }
}

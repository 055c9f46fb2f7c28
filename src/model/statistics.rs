use crate::model::{rating, StoreRating};
use serde::Serialize;
use std::collections::BTreeMap;

/// Aggregate view over one store's ratings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingStatistics {
    /// Mean value rounded to two decimals, `0.0` without ratings.
    pub average: f64,
    pub total_ratings: usize,
    /// Rating value to number of ratings with that value. Values nobody gave are absent.
    pub rating_distribution: BTreeMap<i32, usize>,
    /// Newest first, at most `recent_limit` entries.
    pub recent_ratings: Vec<StoreRating>,
}

impl RatingStatistics {
    pub fn from_ratings(ratings: Vec<StoreRating>, recent_limit: usize) -> Self {
        let average = rating::average_value(&ratings).map_or(0.0, round2);

        let mut rating_distribution = BTreeMap::new();
        for r in &ratings {
            *rating_distribution.entry(r.value).or_insert(0) += 1;
        }

        let total_ratings = ratings.len();
        let mut recent_ratings = rating::recent(ratings);
        recent_ratings.truncate(recent_limit);

        Self {
            average,
            total_ratings,
            rating_distribution,
            recent_ratings,
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{RatingId, StoreId, UserId};
    use chrono::{Duration, Utc};

    fn rating(id: u32, value: i32) -> StoreRating {
        StoreRating {
            id: RatingId(id),
            value,
            user_id: UserId(id),
            store_id: StoreId(1),
            created_at: Utc::now() - Duration::seconds(100 - i64::from(id)),
        }
    }

    #[test]
    fn test_empty_store() {
        let stats = RatingStatistics::from_ratings(Vec::new(), 5);
        assert_eq!(stats.average, 0.0);
        assert_eq!(stats.total_ratings, 0);
        assert!(stats.rating_distribution.is_empty());
        assert!(stats.recent_ratings.is_empty());
    }

    #[test]
    fn test_average_rounds_to_two_decimals() {
        let stats = RatingStatistics::from_ratings(vec![rating(1, 1), rating(2, 2), rating(3, 2)], 5);
        assert_eq!(stats.average, 1.67);

        let stats = RatingStatistics::from_ratings(vec![rating(1, 3), rating(2, 5)], 5);
        assert_eq!(stats.average, 4.0);
    }

    #[test]
    fn test_distribution_and_recent_limit() {
        let ratings: Vec<StoreRating> = [5, 4, 5, 3, 5, 4, 1]
            .into_iter()
            .enumerate()
            .map(|(i, value)| rating(i as u32 + 1, value))
            .collect();

        let stats = RatingStatistics::from_ratings(ratings, 5);
        assert_eq!(stats.total_ratings, 7);
        assert_eq!(
            stats.rating_distribution,
            BTreeMap::from([(1, 1), (3, 1), (4, 2), (5, 3)])
        );

        let recent: Vec<u32> = stats.recent_ratings.iter().map(|r| r.id.0).collect();
        assert_eq!(recent, vec![7, 6, 5, 4, 3]);
    }
}

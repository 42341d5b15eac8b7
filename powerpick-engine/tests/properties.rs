//! Property-based tests for the analysis and prediction invariants.

use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use powerpick_data::models::{DrawingRecord, Pool};
use powerpick_engine::analysis::{
    analyze, frequency_of, overdue_ranking, pair_counts, parity_pattern, rank_cold, rank_hot,
    sum_statistics,
};
use powerpick_engine::config::{AnalysisConfig, PredictorConfig};
use powerpick_engine::predictor::{generate_bonus, generate_predictions, generate_primary_set};

/// Strategy: one drawing's balls (5 distinct, 1-69) and bonus (1-26).
fn draw_strategy() -> impl Strategy<Value = ([u8; 5], u8)> {
    (
        prop::sample::subsequence((1..=69u8).collect::<Vec<_>>(), 5).prop_shuffle(),
        1..=26u8,
    )
        .prop_map(|(balls, bonus)| ([balls[0], balls[1], balls[2], balls[3], balls[4]], bonus))
}

/// Strategy: a non-empty newest-first history.
fn records_strategy() -> impl Strategy<Value = Vec<DrawingRecord>> {
    prop::collection::vec(draw_strategy(), 1..60).prop_map(|draws| {
        let newest = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
        draws
            .into_iter()
            .enumerate()
            .map(|(i, (numbers, bonus))| DrawingRecord {
                date: newest - Days::new(3 * i as u64),
                numbers,
                bonus,
                multiplier: None,
            })
            .collect()
    })
}

proptest! {
    // 1. Frequencies cover the whole domain and sum to 5n / n
    #[test]
    fn frequency_totals(records in records_strategy()) {
        let n = records.len() as u32;
        let balls = frequency_of(&records, Pool::Balls).unwrap();
        let bonus = frequency_of(&records, Pool::Bonus).unwrap();
        prop_assert_eq!(balls.total(), 5 * n);
        prop_assert_eq!(bonus.total(), n);
        prop_assert_eq!(balls.iter().map(|e| e.number).collect::<Vec<_>>(), (1..=69).collect::<Vec<u8>>());
        prop_assert_eq!(bonus.iter().map(|e| e.number).collect::<Vec<_>>(), (1..=26).collect::<Vec<u8>>());
    }

    // 2. Rankings are bounded by k and cold never lists an unseen value
    #[test]
    fn ranking_bounds(records in records_strategy(), k in 0..80usize) {
        let table = frequency_of(&records, Pool::Balls).unwrap();
        let hot = rank_hot(&table, k);
        let cold = rank_cold(&table, k);
        prop_assert!(hot.len() <= k);
        prop_assert!(cold.len() <= k);
        prop_assert!(cold.iter().all(|e| e.count > 0));
        prop_assert!(hot.windows(2).all(|w| w[0].count > w[1].count
            || (w[0].count == w[1].count && w[0].number < w[1].number)));
        prop_assert!(cold.windows(2).all(|w| w[0].count < w[1].count
            || (w[0].count == w[1].count && w[0].number < w[1].number)));
    }

    // 3. Ten pairs per drawing
    #[test]
    fn pair_total(records in records_strategy()) {
        let pairs = pair_counts(&records);
        prop_assert_eq!(pairs.total(), 10 * records.len() as u32);
        prop_assert!(pairs.rare(usize::MAX).iter().all(|p| p.count > 0 && p.pair.0 < p.pair.1));
    }

    // 4. Overdue: newest drawing's balls are 0, unseen balls are n
    #[test]
    fn overdue_edges(records in records_strategy()) {
        let n = records.len() as u32;
        let ranking = overdue_ranking(&records);
        prop_assert_eq!(ranking.len(), 69);
        for o in &ranking {
            if records[0].numbers.contains(&o.number) {
                prop_assert_eq!(o.drawings_since, 0);
            }
            if !records.iter().any(|r| r.numbers.contains(&o.number)) {
                prop_assert_eq!(o.drawings_since, n);
            }
        }
        prop_assert!(ranking.windows(2).all(|w| w[0].drawings_since >= w[1].drawings_since));
    }

    // 5. Sum statistics are consistent
    #[test]
    fn sum_bounds(records in records_strategy()) {
        let stats = sum_statistics(&records);
        prop_assert!(stats.min <= stats.average && stats.average <= stats.max);
        prop_assert_eq!(stats.histogram.len(), 5);
        prop_assert_eq!(stats.histogram.values().sum::<u32>(), records.len() as u32);
    }

    // 6. Parity counts cover every drawing
    #[test]
    fn parity_total(records in records_strategy()) {
        let counts = parity_pattern(&records);
        prop_assert_eq!(counts.len(), 6);
        prop_assert_eq!(counts.values().sum::<u32>(), records.len() as u32);
    }

    // 7. Generated sets are well formed
    #[test]
    fn prediction_shape(records in records_strategy(), seed in any::<u64>()) {
        let snapshot = analyze(&records, &AnalysisConfig::default()).unwrap();
        let config = PredictorConfig::default();
        let mut rng = StdRng::seed_from_u64(seed);

        let set = generate_primary_set(&snapshot, &config, &mut rng).unwrap();
        prop_assert!(set.windows(2).all(|w| w[0] < w[1]), "set={set:?}");
        prop_assert!(set.iter().all(|&n| (1..=69).contains(&n)), "set={set:?}");

        let bonus = generate_bonus(&snapshot, &config, &mut rng).unwrap();
        prop_assert!((1..=26).contains(&bonus));
    }

    // 8. Batch size matches the request
    #[test]
    fn prediction_count(records in records_strategy(), count in 0..12usize, seed in any::<u64>()) {
        let snapshot = analyze(&records, &AnalysisConfig::default()).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        let sets = generate_predictions(&snapshot, count, &PredictorConfig::default(), &mut rng).unwrap();
        prop_assert_eq!(sets.len(), count);
    }
}

#[test]
fn end_to_end_example() {
    let day = |d: u32| NaiveDate::from_ymd_opt(2025, 4, d).unwrap();
    let records = vec![
        DrawingRecord::new(day(5), [4, 23, 30, 46, 62], 2, Some("3x".into())).unwrap(),
        DrawingRecord::new(day(2), [5, 17, 41, 64, 69], 1, None).unwrap(),
        DrawingRecord::new(day(1), [4, 23, 41, 52, 60], 2, None).unwrap(),
    ];

    let snapshot = analyze(&records, &AnalysisConfig::default()).unwrap();
    assert_eq!(snapshot.ball_frequency.count(4), 2);
    assert_eq!(snapshot.ball_frequency.count(23), 2);
    assert_eq!(snapshot.ball_frequency.count(17), 1);
    assert_eq!(snapshot.ball_frequency.count(1), 0);
    assert_eq!(snapshot.bonus_frequency.count(2), 2);
    assert_eq!(pair_counts(&records).get(4, 23), 2);

    let ranking = overdue_ranking(&records);
    let since = |n: u8| ranking.iter().find(|o| o.number == n).map(|o| o.drawings_since);
    assert_eq!(since(46), Some(0));
    assert_eq!(since(1), Some(3));

    let four_even = snapshot
        .parity
        .iter()
        .find(|(p, _)| p.to_string() == "4 Even, 1 Odd")
        .map(|(_, &c)| c);
    assert_eq!(four_even, Some(1));

    let mut rng = StdRng::seed_from_u64(1);
    let sets = generate_predictions(&snapshot, 3, &PredictorConfig::default(), &mut rng).unwrap();
    assert_eq!(sets.len(), 3);
}

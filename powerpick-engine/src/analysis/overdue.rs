use serde::Serialize;

use powerpick_data::models::{DrawingRecord, Pool};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Overdue {
    pub number: u8,
    pub drawings_since: u32,
}

/// Drawings since each ball was last seen, for all 69 balls, most overdue
/// first (ties by ascending value).
///
/// `records` must be newest-first: index 0 counts as "seen 0 drawings ago".
/// A ball never seen gets `records.len()`.
pub fn overdue_ranking(records: &[DrawingRecord]) -> Vec<Overdue> {
    let pool = Pool::Balls;
    let never = records.len() as u32;
    let mut gaps = vec![never; pool.size()];

    for (t, record) in records.iter().enumerate() {
        for &n in pool.numbers_from(record) {
            if let Some(gap) = usize::from(n).checked_sub(1).and_then(|idx| gaps.get_mut(idx)) {
                if *gap == never {
                    *gap = t as u32;
                }
            }
        }
    }

    let mut ranking: Vec<Overdue> = pool
        .domain()
        .zip(gaps)
        .map(|(number, drawings_since)| Overdue {
            number,
            drawings_since,
        })
        .collect();
    ranking.sort_by(|a, b| b.drawings_since.cmp(&a.drawings_since));
    ranking
}

pub fn overdue(records: &[DrawingRecord], k: usize) -> Vec<Overdue> {
    let mut ranking = overdue_ranking(records);
    ranking.truncate(k);
    ranking
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::tests::sample_records;

    fn since(ranking: &[Overdue], number: u8) -> u32 {
        ranking
            .iter()
            .find(|o| o.number == number)
            .map(|o| o.drawings_since)
            .unwrap()
    }

    #[test]
    fn test_overdue_sample() {
        let ranking = overdue_ranking(&sample_records());
        assert_eq!(ranking.len(), 69);
        assert_eq!(since(&ranking, 46), 0);
        assert_eq!(since(&ranking, 4), 0);
        assert_eq!(since(&ranking, 41), 1);
        assert_eq!(since(&ranking, 52), 2);
        assert_eq!(since(&ranking, 1), 3);
    }

    #[test]
    fn test_overdue_order() {
        let top = overdue(&sample_records(), 5);
        assert_eq!(top.len(), 5);
        let numbers: Vec<u8> = top.iter().map(|o| o.number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 6, 7]);
        assert!(top.iter().all(|o| o.drawings_since == 3));
    }

    #[test]
    fn test_overdue_seen_only_in_oldest() {
        let ranking = overdue_ranking(&sample_records());
        let seen: Vec<&Overdue> = ranking.iter().filter(|o| o.drawings_since < 3).collect();
        assert_eq!(seen.len(), 12);
        assert_eq!(seen[0].drawings_since, 2);
        assert_eq!(seen[0].number, 52);
    }
}

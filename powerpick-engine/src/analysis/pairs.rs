use std::collections::BTreeMap;

use serde::Serialize;

use powerpick_data::models::DrawingRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PairCount {
    /// Smaller value first.
    pub pair: (u8, u8),
    pub count: u32,
}

impl PairCount {
    /// The other member of the pair, if `number` is one of them.
    pub fn partner_of(&self, number: u8) -> Option<u8> {
        match self.pair {
            (a, b) if a == number => Some(b),
            (a, b) if b == number => Some(a),
            _ => None,
        }
    }
}

/// Co-occurrence counts of every ball pair seen at least once, keyed in
/// ascending (first, second) order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairCounts {
    counts: BTreeMap<(u8, u8), u32>,
}

impl PairCounts {
    pub fn get(&self, a: u8, b: u8) -> u32 {
        let key = if a <= b { (a, b) } else { (b, a) };
        self.counts.get(&key).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    fn entries(&self) -> impl Iterator<Item = PairCount> + '_ {
        self.counts
            .iter()
            .map(|(&pair, &count)| PairCount { pair, count })
    }

    /// Top `k` by descending count, ties by ascending first then second value.
    pub fn common(&self, k: usize) -> Vec<PairCount> {
        let mut entries: Vec<PairCount> = self.entries().collect();
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        entries.truncate(k);
        entries
    }

    /// Bottom `k` by ascending count. Pairs that never co-occurred are not
    /// tracked and so never show up here.
    pub fn rare(&self, k: usize) -> Vec<PairCount> {
        let mut entries: Vec<PairCount> = self.entries().collect();
        entries.sort_by(|a, b| a.count.cmp(&b.count));
        entries.truncate(k);
        entries
    }
}

pub fn pair_counts(records: &[DrawingRecord]) -> PairCounts {
    let mut counts = BTreeMap::new();

    for record in records {
        let numbers = &record.numbers;
        for i in 0..numbers.len() {
            for j in (i + 1)..numbers.len() {
                let key = if numbers[i] < numbers[j] {
                    (numbers[i], numbers[j])
                } else {
                    (numbers[j], numbers[i])
                };
                *counts.entry(key).or_insert(0) += 1;
            }
        }
    }

    PairCounts { counts }
}

use serde::{Serialize, Serializer};

use powerpick_data::models::{DrawingRecord, Pool};

use crate::error::{EngineError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NumberCount {
    pub number: u8,
    pub count: u32,
}

/// Occurrence count for every value of a pool, zero counts included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    pool: Pool,
    counts: Vec<u32>,
}

impl FrequencyTable {
    pub fn pool(&self) -> Pool {
        self.pool
    }

    /// 0 for values outside the pool.
    pub fn count(&self, number: u8) -> u32 {
        usize::from(number)
            .checked_sub(1)
            .and_then(|idx| self.counts.get(idx))
            .copied()
            .unwrap_or(0)
    }

    /// Entries in ascending value order.
    pub fn iter(&self) -> impl Iterator<Item = NumberCount> + '_ {
        self.pool
            .domain()
            .zip(self.counts.iter())
            .map(|(number, &count)| NumberCount { number, count })
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }
}

impl Serialize for FrequencyTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter().map(|e| (e.number, e.count)))
    }
}

pub fn frequency_of(records: &[DrawingRecord], pool: Pool) -> Result<FrequencyTable> {
    if records.is_empty() {
        return Err(EngineError::EmptyInput);
    }

    let mut counts = vec![0u32; pool.size()];
    for record in records {
        for &n in pool.numbers_from(record) {
            if let Some(slot) = usize::from(n).checked_sub(1).and_then(|idx| counts.get_mut(idx)) {
                *slot += 1;
            }
        }
    }

    Ok(FrequencyTable { pool, counts })
}

/// Top `k` by descending count; ties keep ascending value order.
pub fn rank_hot(table: &FrequencyTable, k: usize) -> Vec<NumberCount> {
    let mut entries: Vec<NumberCount> = table.iter().collect();
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries.truncate(k);
    entries
}

/// Bottom `k` among values seen at least once, ascending count then value.
pub fn rank_cold(table: &FrequencyTable, k: usize) -> Vec<NumberCount> {
    let mut entries: Vec<NumberCount> = table.iter().filter(|e| e.count > 0).collect();
    entries.sort_by(|a, b| a.count.cmp(&b.count));
    entries.truncate(k);
    entries
}

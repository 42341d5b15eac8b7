use std::collections::BTreeMap;

use serde::Serialize;

use powerpick_data::models::DrawingRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum SumBin {
    #[serde(rename = "< 100")]
    Below100,
    #[serde(rename = "100-149")]
    From100To149,
    #[serde(rename = "150-199")]
    From150To199,
    #[serde(rename = "200-249")]
    From200To249,
    #[serde(rename = "250+")]
    From250,
}

impl SumBin {
    pub const ALL: [SumBin; 5] = [
        SumBin::Below100,
        SumBin::From100To149,
        SumBin::From150To199,
        SumBin::From200To249,
        SumBin::From250,
    ];

    pub fn of(sum: u32) -> Self {
        match sum {
            0..=99 => SumBin::Below100,
            100..=149 => SumBin::From100To149,
            150..=199 => SumBin::From150To199,
            200..=249 => SumBin::From200To249,
            _ => SumBin::From250,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SumBin::Below100 => "< 100",
            SumBin::From100To149 => "100-149",
            SumBin::From150To199 => "150-199",
            SumBin::From200To249 => "200-249",
            SumBin::From250 => "250+",
        }
    }
}

impl std::fmt::Display for SumBin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SumStats {
    /// Mean of the per-drawing sums, rounded half up.
    pub average: u32,
    pub min: u32,
    pub max: u32,
    pub histogram: BTreeMap<SumBin, u32>,
}

fn draw_sum(record: &DrawingRecord) -> u32 {
    record.numbers.iter().map(|&n| u32::from(n)).sum()
}

/// Empty input yields all zeros; `analyze` rejects it before getting here.
pub fn sum_statistics(records: &[DrawingRecord]) -> SumStats {
    let mut histogram: BTreeMap<SumBin, u32> = SumBin::ALL.iter().map(|&b| (b, 0)).collect();
    let mut total = 0u64;
    let mut min = u32::MAX;
    let mut max = 0u32;

    for record in records {
        let sum = draw_sum(record);
        total += u64::from(sum);
        min = min.min(sum);
        max = max.max(sum);
        *histogram.entry(SumBin::of(sum)).or_insert(0) += 1;
    }

    let n = records.len() as u64;
    if n == 0 {
        return SumStats {
            average: 0,
            min: 0,
            max: 0,
            histogram,
        };
    }

    SumStats {
        average: ((2 * total + n) / (2 * n)) as u32,
        min,
        max,
        histogram,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::tests::sample_records;

    #[test]
    fn test_sum_statistics_sample() {
        // sums: 165, 196, 180
        let stats = sum_statistics(&sample_records());
        assert_eq!(stats.min, 165);
        assert_eq!(stats.max, 196);
        assert_eq!(stats.average, 180);
        assert_eq!(stats.histogram[&SumBin::From150To199], 3);
        assert_eq!(stats.histogram.len(), 5);
        assert_eq!(stats.histogram.values().sum::<u32>(), 3);
    }

    #[test]
    fn test_average_rounds_half_up() {
        let mut records = sample_records();
        records.truncate(2);
        records[0].numbers = [1, 2, 3, 4, 5];
        records[1].numbers = [1, 2, 3, 4, 6];
        // (15 + 16) / 2 = 15.5
        assert_eq!(sum_statistics(&records).average, 16);
    }

    #[test]
    fn test_bins() {
        assert_eq!(SumBin::of(15), SumBin::Below100);
        assert_eq!(SumBin::of(99), SumBin::Below100);
        assert_eq!(SumBin::of(100), SumBin::From100To149);
        assert_eq!(SumBin::of(199), SumBin::From150To199);
        assert_eq!(SumBin::of(249), SumBin::From200To249);
        assert_eq!(SumBin::of(250), SumBin::From250);
        assert_eq!(SumBin::From250.to_string(), "250+");
    }

    #[test]
    fn test_empty() {
        let stats = sum_statistics(&[]);
        assert_eq!(stats.average, 0);
        assert_eq!(stats.histogram.values().sum::<u32>(), 0);
    }
}

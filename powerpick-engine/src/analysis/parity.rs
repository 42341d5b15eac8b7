use std::collections::BTreeMap;

use serde::Serialize;

use powerpick_data::models::DrawingRecord;

/// Even/odd split of the five balls of a drawing, ordered by even count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum ParityPattern {
    #[serde(rename = "All Odd")]
    AllOdd,
    #[serde(rename = "1 Even, 4 Odd")]
    OneEven,
    #[serde(rename = "2 Even, 3 Odd")]
    TwoEven,
    #[serde(rename = "3 Even, 2 Odd")]
    ThreeEven,
    #[serde(rename = "4 Even, 1 Odd")]
    FourEven,
    #[serde(rename = "All Even")]
    AllEven,
}

impl ParityPattern {
    pub const ALL: [ParityPattern; 6] = [
        ParityPattern::AllOdd,
        ParityPattern::OneEven,
        ParityPattern::TwoEven,
        ParityPattern::ThreeEven,
        ParityPattern::FourEven,
        ParityPattern::AllEven,
    ];

    /// Counts above 5 saturate to `AllEven`.
    pub fn from_even_count(even: usize) -> Self {
        Self::ALL[even.min(5)]
    }

    pub fn even_count(&self) -> usize {
        *self as usize
    }

    pub fn of(numbers: &[u8]) -> Self {
        Self::from_even_count(numbers.iter().filter(|&&n| n % 2 == 0).count())
    }

    pub fn label(&self) -> &'static str {
        match self {
            ParityPattern::AllOdd => "All Odd",
            ParityPattern::OneEven => "1 Even, 4 Odd",
            ParityPattern::TwoEven => "2 Even, 3 Odd",
            ParityPattern::ThreeEven => "3 Even, 2 Odd",
            ParityPattern::FourEven => "4 Even, 1 Odd",
            ParityPattern::AllEven => "All Even",
        }
    }
}

impl std::fmt::Display for ParityPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Count of drawings per pattern; all six patterns are always present.
pub fn parity_pattern(records: &[DrawingRecord]) -> BTreeMap<ParityPattern, u32> {
    let mut counts: BTreeMap<ParityPattern, u32> =
        ParityPattern::ALL.iter().map(|&p| (p, 0)).collect();
    for record in records {
        *counts.entry(ParityPattern::of(&record.numbers)).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::tests::sample_records;

    #[test]
    fn test_parity_sample() {
        let counts = parity_pattern(&sample_records());
        assert_eq!(counts.len(), 6);
        // {4,23,30,46,62}: 4 even
        assert_eq!(counts[&ParityPattern::FourEven], 1);
        // {5,17,41,64,69}: 1 even
        assert_eq!(counts[&ParityPattern::OneEven], 1);
        // {4,23,41,52,60}: 3 even
        assert_eq!(counts[&ParityPattern::ThreeEven], 1);
        assert_eq!(counts[&ParityPattern::AllOdd], 0);
        assert_eq!(counts.values().sum::<u32>(), 3);
    }

    #[test]
    fn test_even_count_mapping() {
        for (i, p) in ParityPattern::ALL.iter().enumerate() {
            assert_eq!(p.even_count(), i);
            assert_eq!(ParityPattern::from_even_count(i), *p);
        }
        assert_eq!(ParityPattern::of(&[2, 4, 6, 8, 10]), ParityPattern::AllEven);
        assert_eq!(ParityPattern::of(&[1, 3, 5, 7, 9]), ParityPattern::AllOdd);
    }

    #[test]
    fn test_labels_serialize() {
        let json = serde_json::to_value(parity_pattern(&sample_records())).unwrap();
        assert_eq!(json["4 Even, 1 Odd"], 1);
        assert_eq!(json["All Even"], 0);
        assert_eq!(ParityPattern::TwoEven.to_string(), "2 Even, 3 Odd");
    }
}

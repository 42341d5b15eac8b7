use chrono::NaiveDate;
use serde::Serialize;

pub const BALL_MAX: u8 = 69;
pub const BONUS_MAX: u8 = 26;
pub const BALLS_PER_DRAW: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrawingRecord {
    pub date: NaiveDate,
    pub numbers: [u8; 5],
    pub bonus: u8,
    /// Carried through for display only, never read by the analysis.
    pub multiplier: Option<String>,
}

impl DrawingRecord {
    pub fn new(
        date: NaiveDate,
        numbers: [u8; 5],
        bonus: u8,
        multiplier: Option<String>,
    ) -> Result<Self, RecordError> {
        validate_record(&numbers, bonus)?;
        Ok(Self {
            date,
            numbers,
            bonus,
            multiplier,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Pool {
    Balls,
    Bonus,
}

impl Pool {
    pub fn size(&self) -> usize {
        match self {
            Pool::Balls => BALL_MAX as usize,
            Pool::Bonus => BONUS_MAX as usize,
        }
    }

    pub fn pick_count(&self) -> usize {
        match self {
            Pool::Balls => BALLS_PER_DRAW,
            Pool::Bonus => 1,
        }
    }

    pub fn numbers_from<'a>(&self, record: &'a DrawingRecord) -> &'a [u8] {
        match self {
            Pool::Balls => &record.numbers,
            Pool::Bonus => std::slice::from_ref(&record.bonus),
        }
    }

    /// Every value of the pool in ascending order.
    pub fn domain(&self) -> impl Iterator<Item = u8> {
        1..=self.size() as u8
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PredictionSet {
    pub numbers: [u8; 5],
    pub bonus: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("ball {0} out of range (1-69)")]
    BallOutOfRange(u8),

    #[error("bonus {0} out of range (1-26)")]
    BonusOutOfRange(u8),

    #[error("duplicate ball: {0}")]
    DuplicateBall(u8),
}

pub fn validate_record(numbers: &[u8; 5], bonus: u8) -> Result<(), RecordError> {
    for &n in numbers {
        if n < 1 || n > BALL_MAX {
            return Err(RecordError::BallOutOfRange(n));
        }
    }
    if bonus < 1 || bonus > BONUS_MAX {
        return Err(RecordError::BonusOutOfRange(bonus));
    }
    for i in 0..numbers.len() {
        for j in (i + 1)..numbers.len() {
            if numbers[i] == numbers[j] {
                return Err(RecordError::DuplicateBall(numbers[i]));
            }
        }
    }
    Ok(())
}

/// Deterministic newest-first fixture: record 0 is dated `n` days after 2024-01-01.
pub fn make_test_records(n: usize) -> Vec<DrawingRecord> {
    let origin = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default();
    (0..n)
        .map(|i| {
            let base = (i % 13) as u8;
            DrawingRecord {
                date: origin + chrono::Days::new((n - i) as u64),
                numbers: [
                    base * 5 + 1,
                    base * 5 + 2,
                    base * 5 + 3,
                    base * 5 + 4,
                    base * 5 + 5,
                ],
                bonus: base % BONUS_MAX + 1,
                multiplier: None,
            }
        })
        .collect()
}

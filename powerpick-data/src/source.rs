use std::collections::HashSet;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::models::DrawingRecord;

const SAMPLE_RESULTS: &str = include_str!("../assets/sample_results.txt");
const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Anything that can hand over a batch of validated drawing records.
pub trait DrawSource {
    fn name(&self) -> String;
    fn load(&self) -> Result<Vec<DrawingRecord>>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub total: u32,
    pub accepted: u32,
    pub rejected: u32,
}

// ════════════════════════════════════════════════════════════════
// CSV: date,n1,n2,n3,n4,n5,bonus,multiplier
// ════════════════════════════════════════════════════════════════

pub struct CsvSource {
    pub path: PathBuf,
}

impl CsvSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DrawSource for CsvSource {
    fn name(&self) -> String {
        format!("csv:{}", self.path.display())
    }

    fn load(&self) -> Result<Vec<DrawingRecord>> {
        let file = std::fs::File::open(&self.path)
            .with_context(|| format!("Cannot open {:?}", self.path))?;
        let (records, report) = read_csv(file)?;
        log::info!(
            "{}: {} rows, {} accepted, {} rejected",
            self.name(),
            report.total,
            report.accepted,
            report.rejected
        );
        Ok(records)
    }
}

fn parse_row(row: &csv::StringRecord) -> Result<DrawingRecord> {
    let get = |idx: usize| -> Result<String> {
        row.get(idx)
            .map(|s| s.trim().to_string())
            .with_context(|| format!("Missing field at index {}", idx))
    };

    let get_u8 = |idx: usize| -> Result<u8> {
        let s = get(idx)?;
        s.parse::<u8>()
            .with_context(|| format!("Cannot parse '{}' (index {})", s, idx))
    };

    let raw_date = get(0)?;
    let date = NaiveDate::parse_from_str(&raw_date, "%Y-%m-%d")
        .with_context(|| format!("Invalid date: '{}'", raw_date))?;

    let numbers = [get_u8(1)?, get_u8(2)?, get_u8(3)?, get_u8(4)?, get_u8(5)?];
    let bonus = get_u8(6)?;
    let multiplier = row
        .get(7)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    Ok(DrawingRecord::new(date, numbers, bonus, multiplier)?)
}

/// Reads CSV rows with a header line. Bad rows are logged and counted, not fatal.
pub fn read_csv<R: Read>(reader: R) -> Result<(Vec<DrawingRecord>, ImportReport)> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut report = ImportReport::default();
    let mut records = Vec::new();

    for row_result in reader.records() {
        report.total += 1;
        match row_result {
            Ok(row) => match parse_row(&row) {
                Ok(record) => {
                    records.push(record);
                    report.accepted += 1;
                }
                Err(e) => {
                    log::warn!("Skipping row {}: {:#}", report.total, e);
                    report.rejected += 1;
                }
            },
            Err(e) => {
                log::warn!("Unreadable row {}: {}", report.total, e);
                report.rejected += 1;
            }
        }
    }

    Ok((records, report))
}

// ════════════════════════════════════════════════════════════════
// Results page text
// ════════════════════════════════════════════════════════════════

pub struct TextSource {
    pub path: PathBuf,
    pub default_year: i32,
}

impl TextSource {
    pub fn new(path: impl Into<PathBuf>, default_year: i32) -> Self {
        Self {
            path: path.into(),
            default_year,
        }
    }
}

impl DrawSource for TextSource {
    fn name(&self) -> String {
        format!("text:{}", self.path.display())
    }

    fn load(&self) -> Result<Vec<DrawingRecord>> {
        let content = read_text(&self.path)?;
        Ok(parse_results_text(&content, self.default_year))
    }
}

fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Cannot read {:?}", path))
}

/// The bundled sample drawings, in the results page text layout.
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedSource {
    pub default_year: i32,
}

impl Default for EmbeddedSource {
    fn default() -> Self {
        Self { default_year: 2025 }
    }
}

impl DrawSource for EmbeddedSource {
    fn name(&self) -> String {
        "embedded sample".to_string()
    }

    fn load(&self) -> Result<Vec<DrawingRecord>> {
        Ok(parse_results_text(SAMPLE_RESULTS, self.default_year))
    }
}

/// "Sat, Apr 5, 2025" or "Sat, Apr 5" (year taken from `default_year`).
/// The weekday is only used to recognize the line, never checked against the date.
fn parse_date_line(line: &str, default_year: i32) -> Option<NaiveDate> {
    let (weekday, rest) = line.split_once(", ")?;
    if !WEEKDAYS.contains(&weekday) {
        return None;
    }
    NaiveDate::parse_from_str(rest, "%b %d, %Y")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{rest}, {default_year}"), "%b %d, %Y"))
        .ok()
}

fn is_multiplier(line: &str) -> bool {
    line.strip_suffix('x')
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
}

#[derive(Default)]
struct PendingDraw {
    date: Option<NaiveDate>,
    numbers: Vec<u8>,
    bonus: Option<u8>,
    multiplier: Option<String>,
}

impl PendingDraw {
    fn finish(self, out: &mut Vec<DrawingRecord>) {
        let (Some(date), Some(bonus)) = (self.date, self.bonus) else {
            return;
        };
        let Ok(numbers) = <[u8; 5]>::try_from(self.numbers) else {
            return;
        };
        match DrawingRecord::new(date, numbers, bonus, self.multiplier) {
            Ok(record) => out.push(record),
            Err(e) => log::warn!("Dropping drawing of {}: {}", date, e),
        }
    }
}

/// Extracts drawings from the text of a results page: a date line, then one
/// number per line (five balls, then the bonus), then an optional multiplier.
pub fn parse_results_text(content: &str, default_year: i32) -> Vec<DrawingRecord> {
    let mut records = Vec::new();
    let mut pending = PendingDraw::default();
    let mut lines = content.lines().map(str::trim);

    while let Some(line) = lines.next() {
        if let Some(date) = parse_date_line(line, default_year) {
            std::mem::take(&mut pending).finish(&mut records);
            pending.date = Some(date);
            continue;
        }
        if pending.date.is_none() {
            continue;
        }

        if !line.is_empty() && line.bytes().all(|b| b.is_ascii_digit()) {
            // Values that do not fit a u8 become 0 and fail validation.
            let n = line.parse::<u8>().unwrap_or(0);
            if pending.numbers.len() < 5 {
                pending.numbers.push(n);
            } else if pending.bonus.is_none() {
                pending.bonus = Some(n);
            }
        } else if line == "Power Play" {
            pending.multiplier = lines.next().map(str::to_string);
        } else if is_multiplier(line) {
            pending.multiplier = Some(line.to_string());
        }
    }
    pending.finish(&mut records);

    records
}

// ════════════════════════════════════════════════════════════════
// Normalization
// ════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from.map_or(true, |from| date >= from) && self.to.map_or(true, |to| date <= to)
    }
}

/// Filters to `range`, keeps the first drawing seen for each date and sorts
/// newest-first, which is the order the analysis expects.
pub fn prepare(mut records: Vec<DrawingRecord>, range: DateRange) -> Vec<DrawingRecord> {
    records.retain(|r| range.contains(r.date));

    let mut seen = HashSet::new();
    records.retain(|r| seen.insert(r.date));

    records.sort_by(|a, b| b.date.cmp(&a.date));
    records
}

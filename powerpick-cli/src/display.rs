use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};

use powerpick_data::models::{DrawingRecord, PredictionSet};
use powerpick_engine::analysis::{AnalysisSnapshot, NumberCount, PairCount};

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

fn join_numbers(numbers: &[u8]) -> String {
    numbers
        .iter()
        .map(|n| format!("{:2}", n))
        .collect::<Vec<_>>()
        .join(" - ")
}

pub fn display_draws(records: &[DrawingRecord]) {
    if records.is_empty() {
        println!("No drawings to show.");
        return;
    }

    let mut table = new_table(vec!["Date", "Balls", "Bonus", "Multiplier"]);
    for record in records {
        let mut sorted = record.numbers;
        sorted.sort();
        table.add_row(vec![
            record.date.format("%a %Y-%m-%d").to_string(),
            join_numbers(&sorted),
            format!("{:2}", record.bonus),
            record.multiplier.clone().unwrap_or_else(|| "—".to_string()),
        ]);
    }
    println!("{table}");
}

fn ranking_table(title: &str, entries: &[NumberCount], color: Color) {
    println!("\n── {title} ──");
    let mut table = new_table(vec!["Number", "Drawn"]);
    for e in entries {
        table.add_row(vec![
            Cell::new(format!("{:2}", e.number)).fg(color),
            Cell::new(e.count),
        ]);
    }
    println!("{table}");
}

fn pairs_table(title: &str, pairs: &[PairCount]) {
    println!("\n── {title} ──");
    let mut table = new_table(vec!["Pair", "Together"]);
    for p in pairs {
        table.add_row(vec![
            format!("{:2} & {:2}", p.pair.0, p.pair.1),
            p.count.to_string(),
        ]);
    }
    println!("{table}");
}

pub fn display_stats(snapshot: &AnalysisSnapshot, records: &[DrawingRecord]) {
    let (newest, oldest) = match (records.first(), records.last()) {
        (Some(first), Some(last)) => (first.date.to_string(), last.date.to_string()),
        _ => (String::new(), String::new()),
    };
    println!(
        "\n📊 Statistics over {} drawings ({} → {})",
        snapshot.draw_count, oldest, newest
    );

    ranking_table("Hot balls", &snapshot.hot_balls, Color::Green);
    ranking_table("Cold balls", &snapshot.cold_balls, Color::Red);
    ranking_table("Hot bonus", &snapshot.hot_bonus, Color::Green);
    ranking_table("Cold bonus", &snapshot.cold_bonus, Color::Red);

    pairs_table("Common pairs", &snapshot.common_pairs);
    pairs_table("Rare pairs", &snapshot.rare_pairs);

    println!("\n── Overdue balls ──");
    let mut table = new_table(vec!["Number", "Drawings since"]);
    for o in &snapshot.overdue {
        let since = if o.drawings_since as usize == snapshot.draw_count {
            format!("{} (never)", o.drawings_since)
        } else {
            o.drawings_since.to_string()
        };
        table.add_row(vec![format!("{:2}", o.number), since]);
    }
    println!("{table}");

    println!("\n── Sums ──");
    println!(
        "  average {}, min {}, max {}",
        snapshot.sums.average, snapshot.sums.min, snapshot.sums.max
    );
    let mut table = new_table(vec!["Range", "Drawings"]);
    for (bin, count) in &snapshot.sums.histogram {
        table.add_row(vec![bin.to_string(), count.to_string()]);
    }
    println!("{table}");

    println!("\n── Even / odd ──");
    let mut table = new_table(vec!["Pattern", "Drawings"]);
    for (pattern, count) in &snapshot.parity {
        table.add_row(vec![pattern.to_string(), count.to_string()]);
    }
    println!("{table}");
}

pub fn display_predictions(predictions: &[PredictionSet], draw_count: usize) {
    println!("\n🎲 Picks weighted by {draw_count} drawings\n");

    let mut table = new_table(vec!["#", "Balls", "Bonus"]);
    for (i, set) in predictions.iter().enumerate() {
        table.add_row(vec![
            format!("{}", i + 1),
            join_numbers(&set.numbers),
            format!("{:2}", set.bonus),
        ]);
    }
    println!("{table}");
}

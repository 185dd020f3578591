use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};

use crate::airports;
use crate::model::{AtisData, AtisInfo};
use crate::parse::{self, ParsedAtis};

/// Formats the service capture timestamp in the ja-JP convention
/// (`2024/06/01 12:00`). Unparseable input is passed through unchanged.
pub fn format_fetched_at(raw: &str) -> String {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return dt.format("%Y/%m/%d %H:%M").to_string();
    }
    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return dt.format("%Y/%m/%d %H:%M").to_string();
    }
    raw.to_string()
}

fn broadcast_block(title: &str, info: &AtisInfo) -> String {
    let parsed = parse::parse_broadcast(&info.raw);

    let mut heading = title.to_string();
    if !parsed.letter.is_empty() {
        heading.push(' ');
        heading.push_str(&parsed.letter);
    }

    format!(
        "\n{heading}\n{}\n{}\n",
        info.timestamp,
        info.raw.trim_end()
    )
}

fn text_block(title: &str, text: &str) -> String {
    format!("\n{title}\n{}\n", text.trim_end())
}

pub fn render(data: &AtisData) -> String {
    let name = airports::name(&data.airport).unwrap_or(&data.airport);
    let updated = format_fetched_at(&data.fetched_at);

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.add_row(vec!["Airport", name]);
    table.add_row(vec!["ICAO", &data.airport]);
    table.add_row(vec!["Last updated", updated.as_str()]);

    let mut out = table.to_string();
    out.push('\n');

    if let Some(ref info) = data.arrival_atis {
        out.push_str(&broadcast_block("Arrival ATIS", info));
    }
    if let Some(ref info) = data.departure_atis {
        out.push_str(&broadcast_block("Departure ATIS", info));
    }
    if let Some(ref metar) = data.metar {
        out.push_str(&text_block("METAR", metar));
    }
    if let Some(ref taf) = data.taf {
        out.push_str(&text_block("TAF", taf));
    }

    out
}

/// Field-by-field view of one parsed broadcast, for `--decoded`.
pub fn render_decoded(title: &str, parsed: &ParsedAtis) -> String {
    let service = parsed
        .service
        .map(|s| s.to_string())
        .unwrap_or_else(|| "—".to_string());

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.add_row(vec!["Facility", parsed.facility.as_str()]);
    table.add_row(vec!["Service", service.as_str()]);
    table.add_row(vec!["Information", parsed.letter.as_str()]);
    table.add_row(vec!["Time group", parsed.time_group.as_str()]);

    let mut out = format!("\n{title}\n{}\n", table);
    for line in &parsed.body {
        out.push_str(line);
        out.push('\n');
    }
    out
}

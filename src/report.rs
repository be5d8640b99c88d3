use crate::config::OutputFormat;
use crate::engines::generation::{Item, SimulationOutcome};
use crate::error::KnapsackError;
use std::io::Write;

pub const BANNER_TITLE: &str = "Knapsack problem";
pub const BANNER_RULE: &str = "----------------";

pub fn format_item(item: &Item) -> String {
    format!("ID: {}, value: {}", item.id, item.value)
}

/// Banner followed by one line per item, in population order
pub fn render_text(outcome: &SimulationOutcome) -> String {
    let mut out = format!("{}\n{}\n", BANNER_TITLE, BANNER_RULE);
    for item in &outcome.items {
        out.push_str(&format_item(item));
        out.push('\n');
    }
    out
}

pub fn render_json(outcome: &SimulationOutcome) -> Result<String, KnapsackError> {
    let mut out = serde_json::to_string_pretty(outcome)?;
    out.push('\n');
    Ok(out)
}

pub fn write_report<W: Write>(
    writer: &mut W,
    outcome: &SimulationOutcome,
    format: OutputFormat,
) -> Result<(), KnapsackError> {
    let rendered = match format {
        OutputFormat::Text => render_text(outcome),
        OutputFormat::Json => render_json(outcome)?,
    };
    writer.write_all(rendered.as_bytes())?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::generation::create_items;

    fn outcome() -> SimulationOutcome {
        let mut items = create_items();
        items[2].value = u64::MAX;
        items[3].fit = true;
        SimulationOutcome {
            items,
            iterations: 4,
            fit_count: 1,
            capped: false,
        }
    }

    #[test]
    fn test_text_report() {
        let text = render_text(&outcome());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 12);
        assert_eq!(lines[0], "Knapsack problem");
        assert_eq!(lines[1], "----------------");
        assert_eq!(lines[2], "ID: 0, value: 4");
        assert_eq!(lines[4], "ID: 2, value: 18446744073709551615");
        assert_eq!(lines[11], "ID: 9, value: 4");
    }

    #[test]
    fn test_json_report() {
        let json = render_json(&outcome()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["iterations"], 4);
        assert_eq!(parsed["capped"], false);
        assert_eq!(parsed["items"].as_array().unwrap().len(), 10);
        assert_eq!(parsed["items"][3]["fit"], true);
        assert_eq!(parsed["items"][2]["value"].as_u64(), Some(u64::MAX));
    }

    #[test]
    fn test_write_report_text() {
        let mut buf = Vec::new();
        write_report(&mut buf, &outcome(), OutputFormat::Text).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), render_text(&outcome()));
    }
}

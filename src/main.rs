use record_set::action::set_config;
use record_set::{PositionalRecordSet, Record, RecordError};

const TEST_JSON: &str = r#"[
  { "ID": 1, "Name": "Joe",   "Title": "First post" },
  { "ID": 2, "Name": "Jane",  "Title": "Re: First post" },
  { "ID": 3, "Name": "Bob",   "Title": "Hello" },
  { "ID": 4, "Name": "Ernie", "Title": "Another one" }
]"#;

fn load_rows(json: &str) -> Result<PositionalRecordSet, Box<dyn std::error::Error>> {
    let rows: Vec<serde_json::Value> = serde_json::from_str(json)?;
    let records = rows
        .into_iter()
        .map(Record::from_json)
        .collect::<Result<Vec<_>, RecordError>>()?;
    Ok(PositionalRecordSet::from_records(records))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut rows = load_rows(TEST_JSON)?;

    for row in &mut rows {
        let stripe = if row.is_odd() { "odd" } else { "even" };
        let edge = match (row.is_first(), row.is_last()) {
            (true, _) => " first",
            (_, true) => " last",
            _ => "",
        };
        println!(
            "{:>2} [{stripe}{edge}] {}",
            row.pos().unwrap_or_default(),
            row.require_str("Title")?
        );
    }

    let authors = rows.map("ID", "Name", Some("(Select one)"))?;
    println!("{}", serde_json::to_string_pretty(&authors)?);

    let action = set_config(serde_json::json!({ "authors": authors.len() }));
    println!("{}", serde_json::to_string(&action)?);
    Ok(())
}

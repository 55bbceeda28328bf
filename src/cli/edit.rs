use anyhow::{bail, Context};
use sd_core::Spider;
use serde_json::Value;

/// Applies `KEY=VALUE` assignments to a spider.
///
/// Values that parse as JSON are stored as such (`true`, `3`, `[..]`),
/// anything else as a string. A JSON value the field cannot hold, such as
/// `cmd=123`, is kept as the raw text instead. Unknown keys land in the
/// record's extra fields and are sent back on save. The id cannot be changed.
pub fn apply_assignments(spider: Spider, assignments: &[String]) -> anyhow::Result<Spider> {
    let mut record = serde_json::to_value(&spider).context("Failed to encode spider")?;
    if !record.is_object() {
        bail!("Spider did not encode as an object");
    }

    for assignment in assignments {
        let Some((key, raw)) = assignment.split_once('=') else {
            bail!("Expected KEY=VALUE, got `{assignment}`");
        };
        let key = key.trim();
        if key.is_empty() {
            bail!("Empty key in `{assignment}`");
        }
        if key == "_id" {
            bail!("The spider id cannot be edited");
        }
        let text = Value::String(raw.to_string());
        let value = serde_json::from_str(raw).unwrap_or_else(|_| text.clone());
        let typed = value != text;
        set_field(&mut record, key, value);
        if typed && serde_json::from_value::<Spider>(record.clone()).is_err() {
            set_field(&mut record, key, text);
        }
    }

    serde_json::from_value(record).context("Edited spider is not a valid spider record")
}

fn set_field(record: &mut Value, key: &str, value: Value) {
    if let Some(fields) = record.as_object_mut() {
        fields.insert(key.to_string(), value);
    }
}

use std::fs;
use std::io::Write;

use anyhow::{Context, Result};
use serde_json::{Map, Value as JsonValue};

use crate::cli::args::QueryArgs;
use crate::log;
use crate::page::IndexRecord;

/// Print records to stdout or write them to `--output`.
///
/// Always emits a JSON array, `[]` when nothing matched.
pub(super) fn output_records(records: &mut [IndexRecord], args: &QueryArgs) -> Result<()> {
    let output = format_records(records, args.fields.as_deref())?;

    let formatted = if args.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };

    if let Some(ref output_path) = args.output {
        let mut file = fs::File::create(output_path)
            .with_context(|| format!("failed to create `{}`", output_path.display()))?;
        writeln!(file, "{}", formatted)?;
        log!("query"; "wrote output to {}", output_path.display());
    } else {
        println!("{}", formatted);
    }

    Ok(())
}

/// Records as they would be uploaded, `objectID` included.
fn format_records(records: &mut [IndexRecord], fields: Option<&[String]>) -> Result<JsonValue> {
    let mut values = Vec::with_capacity(records.len());
    for record in records.iter_mut() {
        record.ensure_object_id();
        let mut value = serde_json::to_value(&*record)?;
        if let (Some(fields), Some(JsonValue::Object(meta))) = (fields, value.get_mut("meta")) {
            *meta = filter_fields(meta, fields);
        }
        values.push(value);
    }
    Ok(JsonValue::Array(values))
}

/// Keep only the requested `meta` keys, in request order.
///
/// A requested key the record lacks is shown as `null`.
fn filter_fields(meta: &Map<String, JsonValue>, fields: &[String]) -> Map<String, JsonValue> {
    fields
        .iter()
        .map(|field| {
            let value = meta.get(field).cloned().unwrap_or(JsonValue::Null);
            (field.clone(), value)
        })
        .collect()
}

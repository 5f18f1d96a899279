use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let prefs = ui::prefs();
    let options = table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    };

    let value = serde_json::to_value(value)?;
    match value {
        Value::Array(items) => render_array_table(&items, options),
        Value::Object(map) => {
            let headers = ["field", "value"];
            let rows = map
                .into_iter()
                .map(|(key, value)| {
                    let cell = display_cell(&key, &value);
                    vec![key, cell]
                })
                .collect::<Vec<_>>();
            Ok(table::render_entity_table(&headers, &rows, options))
        }
        scalar => {
            let headers = ["value"];
            let rows = vec![vec![value_to_cell(&scalar)]];
            Ok(table::render_entity_table(&headers, &rows, options))
        }
    }
}

fn render_array_table(items: &[Value], options: table::TableOptions) -> anyhow::Result<String> {
    if items.is_empty() {
        return Ok(String::from("(no records)"));
    }

    let all_objects = items.iter().all(Value::is_object);
    if !all_objects {
        let headers = ["value"];
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return Ok(table::render_entity_table(&headers, &rows, options));
    }

    // Column order follows the first record's field order, so `_id` and the
    // vehicle identifiers land on the left the way the web tables showed them.
    let mut headers = Vec::<String>::new();
    for item in items {
        if let Some(map) = item.as_object() {
            for key in map.keys() {
                if !headers.contains(key) {
                    headers.push(key.clone());
                }
            }
        }
    }

    if headers.is_empty() {
        return Ok(String::from("(no columns)"));
    }

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| {
                    map.get(header)
                        .map_or_else(|| String::from("-"), |value| display_cell(header, value))
                })
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    Ok(table::render_entity_table(&header_refs, &rows, options))
}

/// Render one table cell, formatting server timestamps for humans.
fn display_cell(key: &str, value: &Value) -> String {
    if matches!(key, "createdAt" | "created_at") {
        if let Some(raw) = value.as_str() {
            if let Ok(ts) = raw.parse::<chrono::DateTime<chrono::Utc>>() {
                return fleet_core::dates::format_timestamp(ts);
            }
        }
    }
    value_to_cell(value)
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("null"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use super::render;
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Example {
        id: &'static str,
        veh_number: &'static str,
        km: u32,
    }

    #[test]
    fn json_render_is_valid_json() {
        let value = Example {
            id: "a1",
            veh_number: "GW-881-22",
            km: 590,
        };
        let out = render(&value, OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["veh_number"], "GW-881-22");
        assert_eq!(parsed["km"], 590);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let value = Example {
            id: "a1",
            veh_number: "GW-881-22",
            km: 590,
        };
        let out = render(&value, OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
    }

    #[test]
    fn table_render_for_object_is_tabular() {
        let value = Example {
            id: "a1",
            veh_number: "GW-881-22",
            km: 590,
        };
        let out = render(&value, OutputFormat::Table).expect("table render should work");
        assert!(out.lines().next().is_some_and(|line| line.contains("field")));
        assert!(out.contains("veh_number"));
    }

    #[test]
    fn table_render_for_list_uses_record_columns() {
        let values = vec![
            Example {
                id: "a1",
                veh_number: "GW-881-22",
                km: 590,
            },
            Example {
                id: "a2",
                veh_number: "GT-5512-19",
                km: 120,
            },
        ];
        let out = render(&values, OutputFormat::Table).expect("table render should work");
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].contains("id"));
        assert!(lines[0].contains("veh_number"));
        assert!(lines[1].chars().all(|c| c == '-'));
        assert!(lines[2].contains("GW-881-22"));
    }

    #[test]
    fn created_at_cells_render_human_timestamps() {
        let value = serde_json::json!({
            "_id": "a1",
            "createdAt": "2025-03-04T21:15:00Z"
        });
        let out = render(&value, OutputFormat::Table).expect("table render should work");
        assert!(out.contains("Mar 04, 2025 09:15:00 PM"));
    }

    #[test]
    fn empty_list_renders_placeholder() {
        let values: Vec<Example> = vec![];
        let out = render(&values, OutputFormat::Table).expect("table render should work");
        assert_eq!(out, "(no records)");
    }
}

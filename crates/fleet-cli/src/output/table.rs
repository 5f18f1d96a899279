#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

const MIN_COLUMN_WIDTH: usize = 6;

/// Render an aligned text table for string rows.
#[must_use]
pub fn render_entity_table(
    headers: &[&str],
    rows: &[Vec<String>],
    options: TableOptions,
) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(String::len)
                .max()
                .unwrap_or(0)
                .max(header.len())
                .max(MIN_COLUMN_WIDTH)
        })
        .collect();

    shrink_to_fit(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(widths.iter())
        .map(|(header, width)| {
            let text = truncate_text(header, *width);
            pad_cell(&text, *width, false, false)
        })
        .collect::<Vec<_>>()
        .join("  ");

    let divider = "-".repeat(strip_ansi(&header_line).len());

    let row_lines = rows
        .iter()
        .map(|row| {
            widths
                .iter()
                .enumerate()
                .map(|(index, width)| {
                    let value = row.get(index).cloned().unwrap_or_else(|| "-".to_string());
                    let truncated = truncate_text(&value, *width);
                    let numeric = looks_numeric(&truncated);
                    let cell = if options.color {
                        colorize_status(&truncated)
                    } else {
                        truncated
                    };
                    pad_cell(&cell, *width, numeric, options.color)
                })
                .collect::<Vec<_>>()
                .join("  ")
        })
        .collect::<Vec<_>>();

    let mut lines = Vec::with_capacity(2 + row_lines.len());
    lines.push(header_line);
    lines.push(divider);
    lines.extend(row_lines);
    lines.join("\n")
}

fn shrink_to_fit(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };
    if widths.is_empty() {
        return;
    }

    let separators = widths.len().saturating_sub(1) * 2;
    let mut total = widths.iter().sum::<usize>() + separators;

    // Shave the widest shrinkable column one character at a time until the
    // table fits or every column is at its floor.
    while total > max_width {
        let mut candidate_idx = None;
        let mut candidate_width = 0usize;
        for (idx, width) in widths.iter().enumerate() {
            let floor = headers[idx].len().max(MIN_COLUMN_WIDTH);
            if *width > floor && *width > candidate_width {
                candidate_idx = Some(idx);
                candidate_width = *width;
            }
        }

        let Some(idx) = candidate_idx else {
            break;
        };

        widths[idx] -= 1;
        total -= 1;
    }
}

fn truncate_text(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }

    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.' | ','))
}

fn pad_cell(value: &str, width: usize, numeric: bool, has_ansi: bool) -> String {
    let plain_len = if has_ansi {
        strip_ansi(value).len()
    } else {
        value.len()
    };
    let pad = width.saturating_sub(plain_len);
    if numeric {
        format!("{}{}", " ".repeat(pad), value)
    } else {
        format!("{}{}", value, " ".repeat(pad))
    }
}

fn colorize_status(value: &str) -> String {
    let lower = value.to_ascii_lowercase();
    let code = if matches!(
        lower.as_str(),
        "ok" | "true" | "completed" | "done" | "good" | "passed" | "authenticated" | "yes"
    ) {
        Some("32")
    } else if matches!(
        lower.as_str(),
        "pending" | "ongoing" | "in-progress" | "scheduled" | "due"
    ) {
        Some("33")
    } else if matches!(
        lower.as_str(),
        "error" | "failed" | "false" | "not ok" | "faulty" | "overdue" | "no"
    ) {
        Some("31")
    } else {
        None
    };

    match code {
        Some(code) => format!("\u{1b}[{code}m{value}\u{1b}[0m"),
        None => value.to_string(),
    }
}

fn strip_ansi(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\u{1b}' && chars.peek() == Some(&'[') {
            let _ = chars.next();
            for next in chars.by_ref() {
                if next == 'm' {
                    break;
                }
            }
            continue;
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{render_entity_table, strip_ansi, truncate_text, TableOptions};

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[test]
    fn columns_align_and_numbers_right_justify() {
        let headers = ["veh_number", "km"];
        let rows = vec![
            vec!["GW-881-22".to_string(), "590".to_string()],
            vec!["GT-5512-19".to_string(), "12".to_string()],
        ];
        let out = render_entity_table(&headers, &rows, PLAIN);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[2].starts_with("GW-881-22 "));
        assert!(lines[2].ends_with("590"));
        assert!(lines[3].ends_with(" 12"));
    }

    #[test]
    fn missing_cells_render_dash() {
        let headers = ["driver", "location"];
        let rows = vec![vec!["K. Mensah".to_string()]];
        let out = render_entity_table(&headers, &rows, PLAIN);
        assert!(out.lines().nth(2).is_some_and(|line| line.contains('-')));
    }

    #[test]
    fn wide_tables_shrink_to_max_width() {
        let headers = ["purpose"];
        let rows = vec![vec!["carting aggregates from the eastern quarry".to_string()]];
        let out = render_entity_table(
            &headers,
            &rows,
            TableOptions {
                max_width: Some(20),
                color: false,
            },
        );
        for line in out.lines() {
            assert!(line.chars().count() <= 20, "line too wide: {line:?}");
        }
        assert!(out.contains('…'));
    }

    #[test]
    fn truncation_keeps_width_and_marks_cut() {
        assert_eq!(truncate_text("maintenance", 6), "maint…");
        assert_eq!(truncate_text("km", 6), "km");
        assert_eq!(truncate_text("long", 1), "…");
    }

    #[test]
    fn status_words_get_color_codes() {
        let headers = ["status"];
        let rows = vec![vec!["completed".to_string()], vec!["pending".to_string()]];
        let out = render_entity_table(
            &headers,
            &rows,
            TableOptions {
                max_width: None,
                color: true,
            },
        );
        assert!(out.contains("\u{1b}[32mcompleted\u{1b}[0m"));
        assert!(out.contains("\u{1b}[33mpending\u{1b}[0m"));
        assert_eq!(strip_ansi("\u{1b}[32mcompleted\u{1b}[0m"), "completed");
    }
}

const MIN_COLUMN_WIDTH: usize = 6;
const COLUMN_GAP: &str = "  ";

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
}

impl TableOptions {
    /// Cap the table at `$COLUMNS` when the shell exports it.
    pub fn from_env() -> Self {
        Self {
            max_width: std::env::var("COLUMNS").ok().and_then(|cols| cols.parse().ok()),
        }
    }
}

/// Render an aligned plain-text table. Numeric cells are right-aligned.
#[must_use]
pub fn render_table_rows(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .chain([header.chars().count(), MIN_COLUMN_WIDTH])
                .max()
                .unwrap_or(MIN_COLUMN_WIDTH)
        })
        .collect();

    if let Some(max_width) = options.max_width {
        shrink_to_fit(&mut widths, headers, max_width);
    }

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad(&truncate(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP);
    let divider = "-".repeat(header_line.chars().count());

    let mut lines = vec![header_line, divider];
    lines.extend(rows.iter().map(|row| {
        widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let cell = row.get(index).map_or("-", String::as_str);
                let text = truncate(cell, *width);
                let numeric = looks_numeric(&text);
                pad(&text, *width, numeric)
            })
            .collect::<Vec<_>>()
            .join(COLUMN_GAP)
    }));
    lines.join("\n")
}

/// Narrow the widest column one character at a time until the table fits or
/// every column is at its minimum.
fn shrink_to_fit(widths: &mut [usize], headers: &[&str], max_width: usize) {
    let gaps = widths.len().saturating_sub(1) * COLUMN_GAP.len();
    while widths.iter().sum::<usize>() + gaps > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(index, width)| **width > headers[*index].len().max(MIN_COLUMN_WIDTH))
            .max_by_key(|(_, width)| **width)
            .map(|(index, _)| index);
        let Some(index) = widest else {
            break;
        };
        widths[index] -= 1;
    }
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }
    let mut out = value.chars().take(width - 1).collect::<String>();
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

fn pad(value: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(value.chars().count()));
    if right_align {
        format!("{fill}{value}")
    } else {
        format!("{value}{fill}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alignment_handles_mixed_widths() {
        let rows = vec![
            vec!["fadeIn".to_string(), "600ms".to_string(), "1".to_string()],
            vec![
                "slideUp".to_string(),
                "cubic-bezier(0.2, 0.8, 0.2, 1)".to_string(),
                "-".to_string(),
            ],
        ];
        let table = render_table_rows(
            &["name", "timing", "count"],
            &rows,
            TableOptions { max_width: None },
        );
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("name"));
        assert!(lines[1].chars().all(|c| c == '-'));
        assert!(lines[2].ends_with("     1"));
    }

    #[test]
    fn narrow_terminals_truncate_the_widest_column() {
        let rows = vec![vec!["x".to_string(), "a".repeat(40)]];
        let table = render_table_rows(&["key", "value"], &rows, TableOptions { max_width: Some(20) });
        let lines: Vec<&str> = table.lines().collect();
        assert!(lines[2].chars().count() <= 20, "{}", lines[2]);
        assert!(lines[2].ends_with('…'));
    }
}

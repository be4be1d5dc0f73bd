use console::{measure_text_width, pad_str, Alignment};

use crate::format::AmountFormatter;
use crate::ledger::Transaction;
use crate::terminal::InteractiveStyle;

pub const DEFAULT_DISPLAY_LIMIT: usize = 10;

struct Column {
    header: &'static str,
    min_width: usize,
    alignment: Alignment,
}

const COLUMNS: [Column; 6] = [
    Column {
        header: "Date",
        min_width: 10,
        alignment: Alignment::Left,
    },
    Column {
        header: "Amount",
        min_width: 15,
        alignment: Alignment::Right,
    },
    Column {
        header: "New state",
        min_width: 15,
        alignment: Alignment::Right,
    },
    Column {
        header: "Category",
        min_width: 20,
        alignment: Alignment::Left,
    },
    Column {
        header: "Payee",
        min_width: 0,
        alignment: Alignment::Left,
    },
    Column {
        header: "Note",
        min_width: 0,
        alignment: Alignment::Left,
    },
];

/// The last `limit` items, and whether anything before them was cut off.
pub fn display_window<T>(items: &[T], limit: usize) -> (&[T], bool) {
    if items.len() > limit {
        (&items[items.len() - limit..], true)
    } else {
        (items, false)
    }
}

pub fn preview_uncategorized(
    style: &impl InteractiveStyle,
    formatter: &dyn AmountFormatter,
    uncategorized: &[&Transaction],
) {
    if uncategorized.is_empty() {
        return;
    }
    style.note(&format!(
        "Found {} uncategorized transactions",
        uncategorized.len()
    ));
    write_table(style, formatter, uncategorized);
}

pub fn preview_unprocessed(
    style: &impl InteractiveStyle,
    formatter: &dyn AmountFormatter,
    unprocessed: &[&Transaction],
    display_limit: usize,
) {
    style.note(&format!("Found {} new transactions", unprocessed.len()));
    let (displayed, truncated) = display_window(unprocessed, display_limit);
    if truncated {
        style.note(&format!(
            "(displaying latest {} transactions)",
            displayed.len()
        ));
    }
    write_table(style, formatter, displayed);
}

fn write_table(
    style: &impl InteractiveStyle,
    formatter: &dyn AmountFormatter,
    transactions: &[&Transaction],
) {
    for line in render_table(transactions, formatter) {
        style.write_line(&line);
    }
}

pub fn render_table(transactions: &[&Transaction], formatter: &dyn AmountFormatter) -> Vec<String> {
    let rows: Vec<[String; 6]> = transactions
        .iter()
        .map(|transaction| row(transaction, formatter))
        .collect();
    let widths: Vec<usize> = COLUMNS
        .iter()
        .enumerate()
        .map(|(index, column)| {
            rows.iter()
                .map(|row| measure_text_width(&row[index]))
                .chain([column.min_width, measure_text_width(column.header)])
                .max()
                .unwrap_or(column.min_width)
        })
        .collect();

    let mut lines = Vec::with_capacity(rows.len() + 4);
    lines.push(border(&widths, '┌', '┬', '┐'));
    lines.push(cells(&widths, COLUMNS.iter().map(|column| column.header)));
    lines.push(border(&widths, '├', '┼', '┤'));
    for row in &rows {
        lines.push(cells(&widths, row.iter().map(String::as_str)));
    }
    lines.push(border(&widths, '└', '┴', '┘'));
    lines
}

fn row(transaction: &Transaction, formatter: &dyn AmountFormatter) -> [String; 6] {
    let info = transaction.info();
    [
        info.time.format("%Y-%m-%d").to_string(),
        formatter.format(info.amount),
        formatter.format(info.state),
        single_line(info.category.as_deref().unwrap_or("")),
        single_line(&info.payee),
        single_line(&info.note),
    ]
}

fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn border(widths: &[usize], left: char, middle: char, right: char) -> String {
    let segments: Vec<String> = widths.iter().map(|width| "─".repeat(width + 2)).collect();
    format!("{left}{}{right}", segments.join(&middle.to_string()))
}

fn cells<'a>(widths: &[usize], values: impl Iterator<Item = &'a str>) -> String {
    let padded: Vec<String> = values
        .zip(COLUMNS.iter().zip(widths))
        .map(|(value, (column, width))| {
            pad_str(value, *width, column.alignment, None).into_owned()
        })
        .collect();
    format!("│ {} │", padded.join(" │ "))
}

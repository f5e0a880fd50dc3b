//! Plain-text rendering of the donation table.

use crate::types::Donation;

const HEADERS: [&str; 5] = ["ID", "Donor", "Type", "Qty/Amount", "Date"];

/// Placeholder row shown when the collection is empty.
pub const EMPTY_PLACEHOLDER: &str = "No donations yet.";

/// Render the donation list as an aligned text table, one row per record in
/// the order given (the server lists newest first). An empty list renders
/// the placeholder row instead.
pub fn render_table(donations: &[Donation]) -> String {
    let rows: Vec<[String; 5]> = donations
        .iter()
        .map(|d| {
            [
                d.id.to_string(),
                d.donor_name.clone(),
                d.donation_type.to_string(),
                d.quantity_or_amount.to_string(),
                d.date.format("%Y-%m-%d").to_string(),
            ]
        })
        .collect();

    let mut widths: [usize; 5] = [0; 5];
    for (i, header) in HEADERS.iter().enumerate() {
        widths[i] = header.len();
    }
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.len());
        }
    }

    let mut out = String::new();
    render_row(&mut out, &HEADERS.map(str::to_string), &widths);
    if rows.is_empty() {
        out.push_str(EMPTY_PLACEHOLDER);
        out.push('\n');
        return out;
    }
    for row in &rows {
        render_row(&mut out, row, &widths);
    }
    out
}

fn render_row(out: &mut String, cells: &[String; 5], widths: &[usize; 5]) {
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            out.push_str("  ");
        }
        out.push_str(cell);
        // Pad all but the last column.
        if i + 1 < cells.len() {
            for _ in cell.len()..widths[i] {
                out.push(' ');
            }
        }
    }
    out.push('\n');
}

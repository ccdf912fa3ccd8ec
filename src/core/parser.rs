use crate::domain::model::{Member, Restriction, Roster, Severity};
use crate::utils::error::{Result, SyncError};
use regex::Regex;

/// Builds a [`Roster`] from a raw grid of spreadsheet cell strings.
///
/// Row 0 is the header: columns 1..N are member display names (column 0 is
/// label space). Each later row is one restriction item; its first column
/// is the item label and the remaining columns are the members' cells in
/// header order.
pub fn parse(rows: &[Vec<String>]) -> Result<Roster> {
    if rows.len() < 2 {
        return Err(SyncError::InsufficientDataError { rows: rows.len() });
    }

    let header = &rows[0];
    let mut members: Vec<Member> = header
        .iter()
        .skip(1)
        .map(|name| Member::new(name.trim()))
        .collect();
    let mut restrictions_list: Vec<String> = Vec::new();

    for row in &rows[1..] {
        let item = row.first().map(|cell| cell.trim()).unwrap_or("");
        if item.is_empty() {
            // Spacer rows are allowed in the sheet
            continue;
        }

        if !restrictions_list.iter().any(|known| known == item) {
            restrictions_list.push(item.to_string());
        }

        // Member columns are bounded by the header; extra trailing cells are
        // ignored and short rows read as empty cells.
        for (index, member) in members.iter_mut().enumerate() {
            let cell = row.get(index + 1).map(|cell| cell.trim()).unwrap_or("");
            if cell.is_empty() || cell.eq_ignore_ascii_case("no") {
                continue;
            }
            member.restrictions.push(classify(item, cell));
        }
    }

    Ok(Roster {
        members,
        restrictions_list,
        synced_at: chrono::Utc::now(),
    })
}

/// Classifies one non-empty cell value into a [`Restriction`].
///
/// A value mentioning "airborne" keeps only its first parenthesized
/// substring as notes; anything else keeps the raw trimmed value.
pub fn classify(item: &str, value: &str) -> Restriction {
    let lowered = value.to_lowercase();

    if lowered.contains("airborne") {
        let re = Regex::new(r"\(([^)]*)\)").unwrap();
        let notes = re
            .captures(value)
            .map(|caps| caps[1].to_string())
            .unwrap_or_default();
        return Restriction {
            item: item.to_string(),
            severity: Severity::Airborne,
            notes,
        };
    }

    let severity = if lowered.contains("small amount") {
        Severity::SmallAmounts
    } else {
        Severity::Yes
    };

    Restriction {
        item: item.to_string(),
        severity,
        notes: value.to_string(),
    }
}

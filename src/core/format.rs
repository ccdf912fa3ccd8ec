use crate::domain::model::{Severity, Summary};

/// Canonical text rendering of a [`Summary`].
///
/// This is the single representation consumed by copy/download/export, so
/// it must stay byte-deterministic for a given Summary value.
pub fn format_as_text(summary: &Summary) -> String {
    let mut lines: Vec<String> = Vec::new();

    if summary.meal_name.is_empty() {
        lines.push("Dietary Summary".to_string());
    } else {
        lines.push(format!("Dietary Summary: {}", summary.meal_name));
    }

    lines.push(String::new());
    lines.push(format!(
        "Attendees ({}): {}",
        summary.attendees.len(),
        summary.attendees.join(", ")
    ));

    if !summary.airborne.is_empty() {
        lines.push(String::new());
        lines.push("AIRBORNE ALLERGIES:".to_string());
        for group in &summary.airborne {
            lines.push(format!("  {}:", group.item));
            for entry in &group.entries {
                if entry.notes.is_empty() {
                    lines.push(format!("    - {}", entry.name));
                } else {
                    lines.push(format!("    - {} ({})", entry.name, entry.notes));
                }
            }
        }
    }

    if !summary.other.is_empty() {
        lines.push(String::new());
        lines.push("Other Restrictions:".to_string());
        for group in &summary.other {
            lines.push(format!("  {}:", group.item));
            for entry in &group.entries {
                if entry.severity == Severity::Yes {
                    lines.push(format!("    - {}", entry.name));
                } else {
                    lines.push(format!("    - {} ({})", entry.name, entry.severity.label()));
                }
            }
        }
    }

    lines.push(String::new());
    lines.push("By Person:".to_string());
    for person in &summary.by_person {
        if person.restrictions.is_empty() {
            lines.push(format!("  {}: None", person.name));
        } else {
            let labels: Vec<String> = person
                .restrictions
                .iter()
                .map(|restriction| match restriction.severity {
                    Severity::Yes => restriction.item.clone(),
                    _ => format!("{} ({})", restriction.item, restriction.severity.label()),
                })
                .collect();
            lines.push(format!("  {}: {}", person.name, labels.join(", ")));
        }
    }

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

/// File name for the exported text artifact: whitespace runs in the meal
/// name become single hyphens; a blank meal name falls back to the generic
/// default.
pub fn export_file_name(meal_name: &str) -> String {
    let trimmed = meal_name.trim();
    if trimmed.is_empty() {
        return "dietary-summary.txt".to_string();
    }
    let hyphenated: Vec<&str> = trimmed.split_whitespace().collect();
    format!("{}.txt", hyphenated.join("-"))
}

use crate::domain::model::{
    AirborneEntry, AirborneGroup, Member, OtherEntry, OtherGroup, Roster, Severity, Summary,
};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashSet;

/// Sort and filter configuration injected into [`summarize`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatorConfig {
    /// Items whose lowered name equals or contains one of these terms sort
    /// first, in list order.
    pub priority_items: Vec<String>,
    /// Items whose lowered name exactly equals one of these terms sort
    /// last, in list order.
    pub bottom_items: Vec<String>,
    /// Items whose lowered name contains one of these terms are dropped
    /// before grouping. Empty by default.
    pub excluded_terms: Vec<String>,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            priority_items: vec![
                "vegetarian".to_string(),
                "vegan".to_string(),
                "gluten".to_string(),
            ],
            bottom_items: vec!["none".to_string()],
            excluded_terms: Vec::new(),
        }
    }
}

impl AggregatorConfig {
    /// Preset matching the spreadsheet variants that carry bookkeeping rows
    /// ("Attending?", "Approved") next to the actual restrictions.
    pub fn with_presentation_filter() -> Self {
        Self {
            excluded_terms: vec!["attending".to_string(), "approved".to_string()],
            ..Self::default()
        }
    }

    fn is_excluded(&self, item: &str) -> bool {
        let lowered = item.to_lowercase();
        self.excluded_terms
            .iter()
            .any(|term| lowered.contains(&term.to_lowercase()))
    }

    fn tier(&self, group: &OtherGroup) -> Tier {
        let lowered = group.item.to_lowercase();

        if let Some(index) = self.priority_items.iter().position(|term| {
            let term = term.to_lowercase();
            lowered == term || lowered.contains(&term)
        }) {
            return Tier::Priority(index);
        }

        if let Some(index) = self
            .bottom_items
            .iter()
            .position(|term| lowered == term.to_lowercase())
        {
            return Tier::Bottom(index);
        }

        Tier::ByCount(group.entries.len())
    }
}

enum Tier {
    Priority(usize),
    ByCount(usize),
    Bottom(usize),
}

/// Aggregates the restrictions of the selected attendees into a [`Summary`].
///
/// Attendee names match members case-insensitively; entry order follows
/// roster order, not the order names were supplied. Returns `None` when no
/// name matches any member, which callers treat as a recoverable empty
/// selection rather than an error.
pub fn summarize(
    roster: &Roster,
    attendee_names: &[String],
    meal_name: &str,
    config: &AggregatorConfig,
) -> Option<Summary> {
    let wanted: HashSet<String> = attendee_names
        .iter()
        .map(|name| name.trim().to_lowercase())
        .collect();

    let selected: Vec<&Member> = roster
        .members
        .iter()
        .filter(|member| wanted.contains(&member.name.to_lowercase()))
        .collect();

    if selected.is_empty() {
        return None;
    }

    let mut airborne: Vec<AirborneGroup> = Vec::new();
    let mut other: Vec<OtherGroup> = Vec::new();
    let mut by_person: Vec<Member> = Vec::new();

    for member in &selected {
        let kept: Vec<_> = member
            .restrictions
            .iter()
            .filter(|restriction| !config.is_excluded(&restriction.item))
            .cloned()
            .collect();

        if kept.is_empty() {
            // Unrestricted members still show up, grouped under "None"
            push_other(
                &mut other,
                "None",
                OtherEntry {
                    name: member.name.clone(),
                    severity: Severity::Yes,
                    notes: String::new(),
                },
            );
        } else {
            for restriction in &kept {
                if restriction.severity == Severity::Airborne {
                    push_airborne(
                        &mut airborne,
                        &restriction.item,
                        AirborneEntry {
                            name: member.name.clone(),
                            notes: restriction.notes.clone(),
                        },
                    );
                } else {
                    push_other(
                        &mut other,
                        &restriction.item,
                        OtherEntry {
                            name: member.name.clone(),
                            severity: restriction.severity,
                            notes: restriction.notes.clone(),
                        },
                    );
                }
            }
        }

        by_person.push(Member {
            name: member.name.clone(),
            restrictions: kept,
        });
    }

    sort_other_groups(&mut other, config);

    Some(Summary {
        meal_name: meal_name.trim().to_string(),
        attendees: selected.iter().map(|member| member.name.clone()).collect(),
        airborne,
        other,
        by_person,
    })
}

fn push_airborne(groups: &mut Vec<AirborneGroup>, item: &str, entry: AirborneEntry) {
    match groups.iter_mut().find(|group| group.item == item) {
        Some(group) => group.entries.push(entry),
        None => groups.push(AirborneGroup {
            item: item.to_string(),
            entries: vec![entry],
        }),
    }
}

fn push_other(groups: &mut Vec<OtherGroup>, item: &str, entry: OtherEntry) {
    match groups.iter_mut().find(|group| group.item == item) {
        Some(group) => group.entries.push(entry),
        None => groups.push(OtherGroup {
            item: item.to_string(),
            entries: vec![entry],
        }),
    }
}

/// Three-tier ordering: priority items by list index, then everything else
/// by descending affected-people count, then bottom items by list index.
/// The sort is stable, so ties keep first-seen group order.
fn sort_other_groups(groups: &mut [OtherGroup], config: &AggregatorConfig) {
    groups.sort_by(|a, b| match (config.tier(a), config.tier(b)) {
        (Tier::Priority(a), Tier::Priority(b)) => a.cmp(&b),
        (Tier::Priority(_), _) => Ordering::Less,
        (_, Tier::Priority(_)) => Ordering::Greater,
        (Tier::Bottom(a), Tier::Bottom(b)) => a.cmp(&b),
        (Tier::Bottom(_), _) => Ordering::Greater,
        (_, Tier::Bottom(_)) => Ordering::Less,
        (Tier::ByCount(a), Tier::ByCount(b)) => b.cmp(&a),
    });
}

//! Checklist Toggle Transitions
//!
//! Pure state transitions behind the optimistic checkbox update.

use crate::models::ChecklistEntry;
use std::collections::HashMap;

/// Apply an optimistic toggle: the entry takes the new checked state and the
/// acting user's attribution immediately, before the write confirms.
pub fn apply_toggle(
    items: &mut HashMap<String, ChecklistEntry>,
    item_id: &str,
    checked: bool,
    by: &str,
    time: &str,
) {
    items.insert(
        item_id.to_string(),
        ChecklistEntry {
            checked,
            by: by.to_string(),
            time: time.to_string(),
        },
    );
}

/// Roll back a failed toggle. Only the checked flag is inverted; the
/// optimistic `by`/`time` attribution stays in place.
pub fn revert_toggle(items: &mut HashMap<String, ChecklistEntry>, item_id: &str) {
    if let Some(entry) = items.get_mut(item_id) {
        entry.checked = !entry.checked;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day_with(item_id: &str, checked: bool, by: &str, time: &str) -> HashMap<String, ChecklistEntry> {
        let mut items = HashMap::new();
        items.insert(
            item_id.to_string(),
            ChecklistEntry {
                checked,
                by: by.to_string(),
                time: time.to_string(),
            },
        );
        items
    }

    #[test]
    fn test_apply_overwrites_attribution() {
        let mut items = day_with("1", true, "Ahmad", "08:00");
        apply_toggle(&mut items, "1", false, "Budi", "09:15");

        let entry = &items["1"];
        assert!(!entry.checked);
        assert_eq!(entry.by, "Budi");
        assert_eq!(entry.time, "09:15");
    }

    #[test]
    fn test_revert_inverts_checked_only() {
        let mut items = HashMap::new();
        apply_toggle(&mut items, "2", true, "Budi", "10:30");
        revert_toggle(&mut items, "2");

        let entry = &items["2"];
        assert!(!entry.checked);
        assert_eq!(entry.by, "Budi");
        assert_eq!(entry.time, "10:30");
    }

    #[test]
    fn test_revert_missing_entry_is_noop() {
        let mut items = day_with("1", true, "Ahmad", "08:00");
        revert_toggle(&mut items, "nope");
        assert_eq!(items.len(), 1);
        assert!(items["1"].checked);
    }

    #[test]
    fn test_failing_sequence_ends_inverted_with_stale_attribution() {
        // Every write fails: each attempt is applied optimistically and then
        // reverted. The final checked state is the negation of the last
        // attempt, while the attribution keeps the optimistic values.
        let mut items = day_with("1", false, "Ahmad", "08:00");
        for attempt in [true, false, true] {
            apply_toggle(&mut items, "1", attempt, "Budi", "11:45");
            revert_toggle(&mut items, "1");
        }

        let entry = &items["1"];
        assert!(!entry.checked);
        assert_eq!(entry.by, "Budi");
        assert_eq!(entry.time, "11:45");
    }
}

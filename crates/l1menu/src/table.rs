use std::sync::OnceLock;

use l1menu_core::TriggerTable;

static TABLE: OnceLock<TriggerTable> = OnceLock::new();

/// Process-wide table holding every trigger in [`crate::triggers`].
///
/// Built on first use and read-only afterwards. Tests that need a different
/// set of triggers build their own [`TriggerTable`].
///
/// # Panics
///
/// Panics if two triggers share a (name, version), which is a build defect.
pub fn trigger_table() -> &'static TriggerTable {
    TABLE.get_or_init(|| {
        let mut table = TriggerTable::new();
        if let Err(err) = l1menu_triggers::register_all(&mut table) {
            panic!("trigger registration failed: {err}");
        }
        table
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_table_is_shared() {
        let first = trigger_table();
        let second = trigger_table();
        assert!(std::ptr::eq(first, second));
        assert!(first.contains("L1_SingleMu", 0));
    }
}

//! Widget and radio group identifiers
//!
//! Identifiers are slotmap keys. A key's raw `u64` form doubles as the wire
//! id rendered into markup and echoed back by the client. Keys carry a
//! version, so a raw id is never handed out twice by the same tree.

use slotmap::{new_key_type, Key, KeyData};

new_key_type! {
    /// Identifies a component within its tree
    pub struct WidgetId;

    /// Identifies a radio group within its tree
    pub struct RadioGroupId;
}

impl WidgetId {
    /// Convert to the raw `u64` used on the wire
    pub fn to_raw(self) -> u64 {
        self.data().as_ffi()
    }

    /// Create from a raw `u64` received from the client
    ///
    /// The result may not name a live widget; lookups treat such ids as unknown.
    pub fn from_raw(raw: u64) -> Self {
        Self::from(KeyData::from_ffi(raw))
    }
}

impl std::fmt::Display for WidgetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_raw())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    #[test]
    fn test_raw_round_trip() {
        let mut sm: SlotMap<WidgetId, ()> = SlotMap::with_key();
        let id = sm.insert(());
        assert_eq!(WidgetId::from_raw(id.to_raw()), id);
    }

    #[test]
    fn test_raw_ids_not_reused_after_removal() {
        let mut sm: SlotMap<WidgetId, ()> = SlotMap::with_key();
        let first = sm.insert(());
        sm.remove(first);
        let second = sm.insert(());

        // Same slot, new version
        assert_ne!(first.to_raw(), second.to_raw());
        assert!(!sm.contains_key(WidgetId::from_raw(first.to_raw())));
    }
}

use std::collections::BTreeMap;

use super::DrawCmd;

/// Recorded draw stream for a frame.
///
/// Commands are kept in submission order; immediate-mode backends paint in
/// that order, so there is no separate sort key.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawCmd>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded commands. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.items.push(cmd);
    }

    /// Returns commands in submission order.
    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.items
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &DrawCmd> {
        self.items.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of recorded commands per [`DrawCmd::kind`].
    pub fn counts(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        for cmd in &self.items {
            *counts.entry(cmd.kind()).or_insert(0) += 1;
        }
        counts
    }
}

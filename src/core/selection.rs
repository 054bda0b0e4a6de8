//! # Selection
//!
//! The ordered pair of cards the user is drawing. Click order is kept:
//! the first id becomes `card1_image` in the reading, the second `card2_image`.

use crate::core::catalog::{self, Card, CardId};

/// Maximum number of cards in a reading.
pub const MAX_SELECTED: usize = 2;

/// What a `toggle` call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Added,
    Removed,
    /// The selection was full and the id was new.
    Rejected,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: Vec<CardId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove `id` if selected, otherwise append it when there is room.
    pub fn toggle(&mut self, id: CardId) -> Toggle {
        if let Some(pos) = self.ids.iter().position(|&selected| selected == id) {
            self.ids.remove(pos);
            Toggle::Removed
        } else if self.ids.len() < MAX_SELECTED {
            self.ids.push(id);
            Toggle::Added
        } else {
            Toggle::Rejected
        }
    }

    pub fn is_complete(&self) -> bool {
        self.ids.len() == MAX_SELECTED
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: CardId) -> bool {
        self.ids.contains(&id)
    }

    /// Unselected cards are disabled once the pair is complete.
    /// Selected cards always stay clickable so they can be put back.
    pub fn is_disabled(&self, id: CardId) -> bool {
        self.is_complete() && !self.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Selected ids in click order.
    pub fn ids(&self) -> &[CardId] {
        &self.ids
    }

    /// Selected catalog entries in click order. Ids missing from the
    /// catalog are skipped.
    pub fn cards(&self) -> Vec<&'static Card> {
        self.ids.iter().filter_map(|&id| catalog::find(id)).collect()
    }

    /// The completed pair, if there is one.
    pub fn pair(&self) -> Option<(&'static Card, &'static Card)> {
        match self.cards().as_slice() {
            [first, second] => Some((*first, *second)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_in_click_order() {
        let mut selection = Selection::new();
        assert_eq!(selection.toggle(4), Toggle::Added);
        assert_eq!(selection.toggle(1), Toggle::Added);
        assert_eq!(selection.ids(), &[4, 1]);
        assert!(selection.is_complete());
    }

    #[test]
    fn test_toggle_selected_removes() {
        let mut selection = Selection::new();
        selection.toggle(3);
        assert_eq!(selection.toggle(3), Toggle::Removed);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_third_card_is_rejected() {
        let mut selection = Selection::new();
        selection.toggle(1);
        selection.toggle(2);
        assert_eq!(selection.toggle(3), Toggle::Rejected);
        assert_eq!(selection.ids(), &[1, 2]);
    }

    #[test]
    fn test_removing_from_full_selection_is_legal() {
        let mut selection = Selection::new();
        selection.toggle(1);
        selection.toggle(2);
        assert_eq!(selection.toggle(1), Toggle::Removed);
        assert_eq!(selection.ids(), &[2]);
        assert!(!selection.is_complete());
    }

    #[test]
    fn test_disabled_only_for_unselected_when_full() {
        let mut selection = Selection::new();
        selection.toggle(5);
        assert!(!selection.is_disabled(6));

        selection.toggle(6);
        assert!(selection.is_disabled(1));
        assert!(!selection.is_disabled(5));
        assert!(!selection.is_disabled(6));
    }

    #[test]
    fn test_pair_follows_click_order() {
        let mut selection = Selection::new();
        selection.toggle(8);
        assert!(selection.pair().is_none());
        selection.toggle(2);
        let (first, second) = selection.pair().unwrap();
        assert_eq!(first.name, "Star Guidance");
        assert_eq!(second.name, "Golden Fruit");
    }

    #[test]
    fn test_clear() {
        let mut selection = Selection::new();
        selection.toggle(1);
        selection.toggle(2);
        selection.clear();
        assert_eq!(selection.len(), 0);
        assert!(!selection.is_complete());
    }
}

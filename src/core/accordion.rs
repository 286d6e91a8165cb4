//! Expansion state for accordion lists (FAQ)

use std::collections::BTreeSet;

/// How many items may be expanded at once
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ExpandMode {
    /// Every item toggles independently
    #[default]
    Multiple,
    /// Opening an item collapses the others
    Single,
}

/// Set of expanded item indices
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AccordionState {
    mode: ExpandMode,
    open: BTreeSet<usize>,
}

impl AccordionState {
    pub fn new(mode: ExpandMode) -> Self {
        Self {
            mode,
            open: BTreeSet::new(),
        }
    }

    pub fn mode(&self) -> ExpandMode {
        self.mode
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open.contains(&index)
    }

    pub fn open_count(&self) -> usize {
        self.open.len()
    }

    /// Flip one item. Returns whether it is now expanded.
    pub fn toggle(&mut self, index: usize) -> bool {
        if self.open.remove(&index) {
            return false;
        }
        if self.mode == ExpandMode::Single {
            self.open.clear();
        }
        self.open.insert(index);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_collapsed() {
        let state = AccordionState::new(ExpandMode::Multiple);
        assert_eq!(state.open_count(), 0);
        assert!(!state.is_open(0));
    }

    #[test]
    fn test_multiple_items_toggle_independently() {
        let mut state = AccordionState::new(ExpandMode::Multiple);
        assert!(state.toggle(0));
        assert!(state.toggle(2));
        assert!(state.is_open(0));
        assert!(state.is_open(2));

        assert!(!state.toggle(0));
        assert!(!state.is_open(0));
        assert!(state.is_open(2));
    }

    #[test]
    fn test_single_mode_collapses_others() {
        let mut state = AccordionState::new(ExpandMode::Single);
        state.toggle(1);
        state.toggle(3);
        assert!(!state.is_open(1));
        assert!(state.is_open(3));
        assert_eq!(state.open_count(), 1);
    }

    #[test]
    fn test_single_mode_can_close_everything() {
        let mut state = AccordionState::new(ExpandMode::Single);
        state.toggle(2);
        assert!(!state.toggle(2));
        assert_eq!(state.open_count(), 0);
    }

    #[test]
    fn test_default_mode_keeps_items_independent() {
        let mut state = AccordionState::default();
        assert_eq!(state.mode(), ExpandMode::Multiple);
        state.toggle(0);
        state.toggle(1);
        assert_eq!(state.open_count(), 2);
    }
}

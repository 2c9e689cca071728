//! Collapsible list: a prefix while collapsed, everything while expanded.

use super::state::FetchableState;

/// Default number of entries visible while collapsed
pub const COLLAPSED_LEN: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expansion {
    pub expanded: bool,
    pub collapsed_len: usize,
}

impl Default for Expansion {
    fn default() -> Self {
        Self {
            expanded: false,
            collapsed_len: COLLAPSED_LEN,
        }
    }
}

impl Expansion {
    pub fn collapsed_to(collapsed_len: usize) -> Self {
        Self {
            expanded: false,
            collapsed_len,
        }
    }

    /// The visible part of `items`: always the whole list or its prefix
    pub fn visible<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        if self.expanded {
            items
        } else {
            &items[..items.len().min(self.collapsed_len)]
        }
    }
}

impl<T> FetchableState<Vec<T>, Expansion> {
    pub fn visible(&self) -> &[T] {
        self.ui.visible(&self.data)
    }

    pub fn toggle_expand(&mut self) {
        self.ui.expanded = !self.ui.expanded;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn with_items(n: usize) -> FetchableState<Vec<usize>, Expansion> {
        let mut state = FetchableState::with_ui(Expansion::default());
        state.succeed((0..n).collect());
        state
    }

    #[test]
    fn test_twenty_five_tags_scenario() {
        let mut state = with_items(25);
        assert_eq!(state.visible(), &(0..10).collect::<Vec<usize>>()[..]);

        state.toggle_expand();
        assert_eq!(state.visible().len(), 25);

        state.toggle_expand();
        assert_eq!(state.visible(), &(0..10).collect::<Vec<usize>>()[..]);
    }

    #[test]
    fn test_short_list_shows_everything() {
        let state = with_items(4);
        assert_eq!(state.visible().len(), 4);
    }

    #[test]
    fn test_empty_list() {
        let mut state = with_items(0);
        assert!(state.visible().is_empty());
        state.toggle_expand();
        assert!(state.visible().is_empty());
    }

    #[test]
    fn test_custom_collapsed_len() {
        let mut state: FetchableState<Vec<char>, Expansion> =
            FetchableState::with_ui(Expansion::collapsed_to(3));
        state.succeed(vec!['a', 'b', 'c', 'd']);
        assert_eq!(state.visible(), &['a', 'b', 'c']);
    }

    proptest! {
        /// Visible list is the full list or its prefix, never anything else
        #[test]
        fn visible_is_prefix_or_whole(n in 0usize..60, expanded in any::<bool>()) {
            let mut state = with_items(n);
            if expanded {
                state.toggle_expand();
            }
            let visible = state.visible();
            prop_assert!(state.data.starts_with(visible));
            if expanded {
                prop_assert_eq!(visible.len(), n);
            } else {
                prop_assert_eq!(visible.len(), n.min(COLLAPSED_LEN));
            }
        }

        /// Toggling twice restores the visible list
        #[test]
        fn double_toggle_is_identity(n in 0usize..60, start_expanded in any::<bool>()) {
            let mut state = with_items(n);
            if start_expanded {
                state.toggle_expand();
            }
            let before = state.visible().to_vec();
            state.toggle_expand();
            state.toggle_expand();
            prop_assert_eq!(state.visible(), &before[..]);
        }
    }
}

//! Checked-add-on tracking, keyed by add-on id rather than page position so
//! re-pagination never corrupts it.

use std::collections::HashSet;

use crate::state::types::ModId;

/// Set of add-on ids the user has checked.
///
/// Lives for one dialog session: created empty on open, mutated by checkbox
/// toggles, pruned by [`Selection::reconcile`] whenever the eligible set is
/// recomputed, and discarded when the dialog closes.
#[derive(Clone, Debug, Default)]
pub struct Selection {
    /// Ids currently checked.
    checked: HashSet<ModId>,
}

impl Selection {
    /// Flip the checked state of `id`.
    ///
    /// Unconditional: no validation against the current page, because a
    /// selection may legitimately refer to an item that is not rendered right
    /// now (e.g., immediately after a page turn).
    pub fn toggle(&mut self, id: ModId) {
        if !self.checked.insert(id) {
            self.checked.remove(&id);
        }
    }

    /// Whether `id` is currently checked.
    #[must_use]
    pub fn is_selected(&self, id: ModId) -> bool {
        self.checked.contains(&id)
    }

    /// Ids currently checked, in no particular order.
    #[must_use]
    pub const fn selected_ids(&self) -> &HashSet<ModId> {
        &self.checked
    }

    /// Number of checked ids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.checked.len()
    }

    /// Whether nothing is checked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.checked.is_empty()
    }

    /// What: Drop selections that left the eligible set.
    ///
    /// Inputs:
    /// - `eligible_ids`: Ids present in the freshly computed eligible set.
    ///
    /// Output:
    /// - Retains only ids found in `eligible_ids`; runs before the visible
    ///   page is rebuilt so checkbox initial values match retained
    ///   selections.
    pub fn reconcile(&mut self, eligible_ids: &HashSet<ModId>) {
        self.checked.retain(|id| eligible_ids.contains(id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Toggle flips membership both ways
    ///
    /// - Input: Same id toggled twice
    /// - Output: Checked after the first toggle, unchecked after the second
    fn toggle_flips_membership() {
        let mut sel = Selection::default();
        sel.toggle(3);
        assert!(sel.is_selected(3));
        sel.toggle(3);
        assert!(!sel.is_selected(3));
        assert!(sel.is_empty());
    }

    #[test]
    /// What: Reconcile drops ids missing from the eligible set
    ///
    /// - Input: Ids 1 and 2 checked; only 2 remains eligible
    /// - Output: 1 removed, 2 retained
    fn reconcile_prunes_ineligible_ids() {
        let mut sel = Selection::default();
        sel.toggle(1);
        sel.toggle(2);

        let eligible: HashSet<ModId> = [2].into_iter().collect();
        sel.reconcile(&eligible);

        assert!(!sel.is_selected(1));
        assert!(sel.is_selected(2));
        assert_eq!(sel.len(), 1);
    }

    #[test]
    /// What: Reconcile against an empty eligible set clears everything
    ///
    /// - Input: Two checked ids, empty eligible set
    /// - Output: No selections remain
    fn reconcile_with_empty_eligible_clears_all() {
        let mut sel = Selection::default();
        sel.toggle(1);
        sel.toggle(2);
        sel.reconcile(&HashSet::new());
        assert!(sel.is_empty());
    }
}

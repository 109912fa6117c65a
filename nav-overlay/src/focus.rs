//! Focus trap over the overlay's interactive descendants.
//!
//! A [`FocusableSet`] is captured once when the overlay opens and the cyclic
//! tab rule is a pure function over it. Only the two boundary moves are
//! intercepted; every other Tab press is left to the browser's native order.

/// Direction of a Tab keystroke.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TabDirection {
    /// Tab
    Forward,
    /// Shift+Tab
    Backward,
}

impl TabDirection {
    /// Direction implied by the Shift modifier.
    pub fn from_shift(shift: bool) -> Self {
        if shift { Self::Backward } else { Self::Forward }
    }
}

/// Ordered interactive descendants of the overlay panel.
///
/// May be empty, in which case the trap does nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FocusableSet<N> {
    nodes: Vec<N>,
}

impl<N> Default for FocusableSet<N> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

impl<N: PartialEq> FocusableSet<N> {
    /// Capture a set in document order.
    pub fn new(nodes: Vec<N>) -> Self {
        Self { nodes }
    }

    /// First element, if any.
    pub fn first(&self) -> Option<&N> {
        self.nodes.first()
    }

    /// Last element, if any.
    pub fn last(&self) -> Option<&N> {
        self.nodes.last()
    }

    /// Number of captured elements.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when there is nothing to trap focus on.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Position of `node` within the set.
    pub fn position(&self, node: &N) -> Option<usize> {
        self.nodes.iter().position(|n| n == node)
    }

    /// Elements in tab order.
    pub fn iter(&self) -> impl Iterator<Item = &N> {
        self.nodes.iter()
    }

    /// Where focus must be moved to keep it inside the set, or `None` when the
    /// keystroke should pass through natively.
    ///
    /// Forward from the last element wraps to the first; backward from the
    /// first wraps to the last.
    pub fn wrap_target(&self, current: Option<&N>, direction: TabDirection) -> Option<&N> {
        let current = current?;
        let (edge, target) = match direction {
            TabDirection::Forward => (self.last()?, self.first()?),
            TabDirection::Backward => (self.first()?, self.last()?),
        };
        (edge == current).then_some(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> FocusableSet<&'static str> {
        FocusableSet::new(vec!["A", "B", "C"])
    }

    #[test]
    fn tab_on_last_wraps_to_first() {
        assert_eq!(abc().wrap_target(Some(&"C"), TabDirection::Forward), Some(&"A"));
    }

    #[test]
    fn shift_tab_on_first_wraps_to_last() {
        assert_eq!(abc().wrap_target(Some(&"A"), TabDirection::Backward), Some(&"C"));
    }

    #[test]
    fn interior_moves_pass_through() {
        let set = abc();
        assert_eq!(set.wrap_target(Some(&"A"), TabDirection::Forward), None);
        assert_eq!(set.wrap_target(Some(&"B"), TabDirection::Forward), None);
        assert_eq!(set.wrap_target(Some(&"B"), TabDirection::Backward), None);
        assert_eq!(set.wrap_target(Some(&"C"), TabDirection::Backward), None);
    }

    #[test]
    fn focus_outside_the_set_passes_through() {
        assert_eq!(abc().wrap_target(Some(&"Z"), TabDirection::Forward), None);
        assert_eq!(abc().wrap_target(None, TabDirection::Backward), None);
    }

    #[test]
    fn single_element_wraps_onto_itself() {
        let set = FocusableSet::new(vec!["close"]);
        assert_eq!(set.wrap_target(Some(&"close"), TabDirection::Forward), Some(&"close"));
        assert_eq!(set.wrap_target(Some(&"close"), TabDirection::Backward), Some(&"close"));
    }

    #[test]
    fn empty_set_never_traps() {
        let set: FocusableSet<&str> = FocusableSet::default();
        assert!(set.is_empty());
        assert_eq!(set.first(), None);
        assert_eq!(set.wrap_target(Some(&"A"), TabDirection::Forward), None);
    }

    #[test]
    fn shift_maps_to_backward() {
        assert_eq!(TabDirection::from_shift(true), TabDirection::Backward);
        assert_eq!(TabDirection::from_shift(false), TabDirection::Forward);
    }
}

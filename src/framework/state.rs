//! Filter selection state owned by the controller actor.

/// The filter the controller currently holds.
///
/// Lives inside the actor, so it survives any number of presentation shells being torn
/// down and recreated. `initialized` flips to `true` on the first assignment and never
/// goes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterState<F> {
    pub selected: Option<F>,
    pub initialized: bool,
}

impl<F> Default for FilterState<F> {
    fn default() -> Self {
        Self {
            selected: None,
            initialized: false,
        }
    }
}

impl<F: Copy + PartialEq> FilterState<F> {
    /// Whether `filter` is already the settled selection.
    pub fn holds(&self, filter: F) -> bool {
        self.initialized && self.selected == Some(filter)
    }

    /// Records a new selection.
    pub fn select(&mut self, filter: F) {
        self.selected = Some(filter);
        self.initialized = true;
    }
}

//! Selection handling.

/// A text selection with a base (anchor) and an extent (moving end).
///
/// The two endpoints are not ordered: `base` may be greater than `extent`.
/// When `base == extent` the selection is collapsed and acts as a caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    /// The anchor point; stays put while a selection is extended.
    pub base: usize,
    /// The moving end of the selection.
    pub extent: usize,
}

impl Selection {
    /// Creates a collapsed selection at the given position.
    pub fn new(pos: usize) -> Self {
        Self {
            base: pos,
            extent: pos,
        }
    }

    /// Creates a selection from base to extent.
    pub fn with_range(base: usize, extent: usize) -> Self {
        Self { base, extent }
    }

    /// Returns true if base and extent coincide.
    pub fn is_collapsed(&self) -> bool {
        self.base == self.extent
    }

    /// Returns true if there's an active ranged selection.
    pub fn has_selection(&self) -> bool {
        !self.is_collapsed()
    }

    /// Returns the start and end of the selection (ordered).
    pub fn range(&self) -> (usize, usize) {
        if self.base <= self.extent {
            (self.base, self.extent)
        } else {
            (self.extent, self.base)
        }
    }

    /// Returns the selected range, or None if collapsed.
    pub fn selected_range(&self) -> Option<(usize, usize)> {
        if self.has_selection() {
            Some(self.range())
        } else {
            None
        }
    }

    /// Moves both endpoints to `pos`.
    pub fn collapse_to(&mut self, pos: usize) {
        self.base = pos;
        self.extent = pos;
    }

    /// Moves the extent to `pos`, leaving the base where it is.
    pub fn extend_to(&mut self, pos: usize) {
        self.extent = pos;
    }

    /// Clamps both endpoints into `[0, len]`.
    pub fn clamp(&mut self, len: usize) {
        self.base = self.base.min(len);
        self.extent = self.extent.min(len);
    }
}

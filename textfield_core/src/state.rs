//! Snapshots of the editing state sent to the presentation layer.

/// Which side of a position the caret is drawn on when the position is
/// ambiguous. This core always reports downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAffinity {
    Upstream,
    #[default]
    Downstream,
}

impl TextAffinity {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAffinity::Upstream => "upstream",
            TextAffinity::Downstream => "downstream",
        }
    }
}

/// Composing-range marker used when no IME composition is tracked.
pub const NO_COMPOSING: i64 = -1;

/// Full state of a field at one point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditingState {
    pub text: String,
    pub selection_base: usize,
    pub selection_extent: usize,
    pub selection_affinity: TextAffinity,
    pub selection_is_directional: bool,
    pub composing_base: i64,
    pub composing_extent: i64,
}

impl EditingState {
    /// Builds a snapshot with the fixed affinity, directionality and
    /// composing range this core reports.
    pub fn new(text: String, selection_base: usize, selection_extent: usize) -> Self {
        Self {
            text,
            selection_base,
            selection_extent,
            selection_affinity: TextAffinity::Downstream,
            selection_is_directional: false,
            composing_base: NO_COMPOSING,
            composing_extent: NO_COMPOSING,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_defaults() {
        let state = EditingState::new("abc".to_string(), 1, 3);
        assert_eq!(state.selection_affinity, TextAffinity::Downstream);
        assert!(!state.selection_is_directional);
        assert_eq!(state.composing_base, -1);
        assert_eq!(state.composing_extent, -1);
        assert_eq!(state.selection_affinity.as_str(), "downstream");
    }
}

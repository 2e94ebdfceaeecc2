//! Overlay state for the UI.

/// Overlay drawn on top of the main layout.
///
/// The character detail popup is not listed here: it follows the
/// controller's detail pointer so it disappears automatically when a commit
/// replaces the list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Modal {
    /// No overlay.
    #[default]
    None,
    /// Key binding help.
    Help,
}

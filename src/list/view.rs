use crate::model::card::{Card, CardPatch};

/// Error type for view refreshes
#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    #[error("view refresh failed: {0}")]
    Refresh(String),
}

/// The rendering seam the list manager re-renders through. The manager owns
/// one view and is the only caller; implementations never reach back into the
/// collection.
pub trait ListView {
    /// Rebuild the whole view. `cards` arrive in display order (canonical or
    /// votes-sorted), each one fully normalized.
    fn render_all(&mut self, cards: &[&Card]) -> Result<(), ViewError>;

    /// Update only the sub-parts of one card's visual named by `patch`.
    /// `card` is the post-merge record for implementations that need the
    /// full value (e.g. to recompute a tally).
    fn patch_card(&mut self, card: &Card, patch: &CardPatch) -> Result<(), ViewError>;
}

/// View that draws nothing. Used by the CLI paths, where output is printed
/// after the fact from `get_all()`.
#[derive(Debug, Default)]
pub struct NullView;

impl ListView for NullView {
    fn render_all(&mut self, _cards: &[&Card]) -> Result<(), ViewError> {
        Ok(())
    }

    fn patch_card(&mut self, _card: &Card, _patch: &CardPatch) -> Result<(), ViewError> {
        Ok(())
    }
}

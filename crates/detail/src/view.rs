//! Host view port
//!
//! The host view layer owns the label, map and table widgets. It implements
//! this trait to receive complete, consistent detail state from the
//! presenter; the presenter never holds widget references.

use crate::presenter::DetailSnapshot;

#[cfg_attr(test, mockall::automock)]
pub trait DetailView {
    /// Replace everything on screen with `snapshot`.
    fn present(&mut self, snapshot: &DetailSnapshot);

    /// Nothing is bound; show the empty state.
    fn clear(&mut self);
}

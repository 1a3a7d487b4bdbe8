//! Wrap-around index arithmetic shared by the lightbox and the gallery cursor.

/// Moves `current` one step forward in a sequence of `len`, wrapping to 0.
///
/// Returns `None` when nothing is selected or the sequence is empty.
#[must_use]
pub const fn advance(current: Option<usize>, len: usize) -> Option<usize> {
    match current {
        Some(index) if len > 0 => Some((index + 1) % len),
        _ => None,
    }
}

/// Moves `current` one step back in a sequence of `len`, wrapping to `len - 1`.
///
/// Returns `None` when nothing is selected or the sequence is empty.
#[must_use]
pub const fn retreat(current: Option<usize>, len: usize) -> Option<usize> {
    match current {
        Some(index) if len > 0 => Some((index % len + len - 1) % len),
        _ => None,
    }
}

//! Shared rendering utilities.
//!
//! Widths are counted in `char`s, which matches terminal cells for the ASCII
//! and Latin text the gallery shows.

/// Positions the cursor at a 1-indexed row and column.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Shortens `text` to at most `max` chars, marking the cut with `...`.
///
/// # Example
///
/// ```rust
/// use galeria::ui::helpers::truncate;
///
/// assert_eq!(truncate("Naturaleza", 7), "Natu...");
/// assert_eq!(truncate("Mar", 7), "Mar");
/// ```
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    let len = text.chars().count();
    if len <= max {
        return text.to_string();
    }
    if max <= 3 {
        return text.chars().take(max).collect();
    }
    let kept: String = text.chars().take(max - 3).collect();
    format!("{kept}...")
}

/// Left-aligns `text` in a field of exactly `width` chars.
#[must_use]
pub fn fit(text: &str, width: usize) -> String {
    let shown = truncate(text, width);
    let pad = width.saturating_sub(shown.chars().count());
    format!("{shown}{}", " ".repeat(pad))
}

/// Centers `text` in a field of exactly `width` chars.
#[must_use]
pub fn center(text: &str, width: usize) -> String {
    let shown = truncate(text, width);
    let len = shown.chars().count();
    let left = width.saturating_sub(len) / 2;
    let right = width.saturating_sub(len + left);
    format!("{}{shown}{}", " ".repeat(left), " ".repeat(right))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_counts_chars_not_bytes() {
        assert_eq!(truncate("Montañas nevadas", 8), "Monta...");
        assert_eq!(truncate("abcdef", 2), "ab");
    }

    #[test]
    fn fit_and_center_produce_exact_width() {
        assert_eq!(fit("ab", 4), "ab  ");
        assert_eq!(fit("abcdefgh", 6), "abc...");
        assert_eq!(center("ab", 6), "  ab  ");
        assert_eq!(center("ab", 5).chars().count(), 5);
    }
}

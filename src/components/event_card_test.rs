use super::*;

#[test]
fn favorite_label_reflects_membership() {
    assert_eq!(favorite_label(true), "Remove from favorites");
    assert_eq!(favorite_label(false), "Add to favorites");
}

#[test]
fn favorite_glyph_is_filled_when_on() {
    assert_eq!(favorite_glyph(true), "\u{2665}");
    assert_eq!(favorite_glyph(false), "\u{2661}");
}

use super::*;

// =============================================================
// Display helpers
// =============================================================

#[test]
fn date_prefix_truncates_iso_timestamps() {
    assert_eq!(date_prefix("2025-04-02T09:00:00.000Z"), "2025-04-02");
}

#[test]
fn date_prefix_passes_short_values_through() {
    assert_eq!(date_prefix("2025"), "2025");
    assert_eq!(date_prefix(""), "");
}

#[test]
fn basename_strips_directories() {
    assert_eq!(basename("uploads/1743584700-photo.jpg"), "1743584700-photo.jpg");
    assert_eq!(basename("a/b/c.txt"), "c.txt");
}

#[test]
fn basename_keeps_bare_names() {
    assert_eq!(basename("photo.jpg"), "photo.jpg");
}

#[test]
fn initial_uppercases_the_first_letter() {
    assert_eq!(initial("ana"), "A");
    assert_eq!(initial("Bruno"), "B");
}

#[test]
fn initial_of_empty_name_is_empty() {
    assert_eq!(initial(""), "");
}

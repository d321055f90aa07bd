use gomoku::{coord_to_string, parse_coord};

#[test]
fn test_parse_valid_coords() {
    assert_eq!(parse_coord("A1"), Some((0, 0)));
    assert_eq!(parse_coord("E5"), Some((4, 4)));
    assert_eq!(parse_coord("J10"), Some((9, 9)));
    // lowercase accepted
    assert_eq!(parse_coord("c7"), Some((6, 2)));
}

#[test]
fn test_parse_rejects_off_board() {
    assert_eq!(parse_coord("K1"), None); // column past J
    assert_eq!(parse_coord("A0"), None); // rows are 1-based
    assert_eq!(parse_coord("A11"), None); // row past 10
}

#[test]
fn test_parse_rejects_garbage() {
    assert_eq!(parse_coord(""), None);
    assert_eq!(parse_coord("A"), None);
    assert_eq!(parse_coord("5A"), None);
    assert_eq!(parse_coord("AA"), None);
    assert_eq!(parse_coord("undo"), None);
}

#[test]
fn test_coord_formatting_roundtrip() {
    for row in 0..10 {
        for col in 0..10 {
            let s = coord_to_string(row, col);
            assert_eq!(parse_coord(&s), Some((row, col)));
        }
    }
}

use sea_battle::{coordinate_from_text, is_valid_board_cell, Coordinate, CoordinateError};

#[test]
fn test_text_roundtrip_all_cells() {
    for coord in Coordinate::all() {
        let text = coord.to_string();
        assert_eq!(coordinate_from_text(&text), Ok(coord));
        assert_eq!(text.parse::<Coordinate>(), Ok(coord));
    }
    assert_eq!(Coordinate::all().count(), 100);
}

#[test]
fn test_canonical_form() {
    assert_eq!(Coordinate::new(3, 7).unwrap().to_string(), "C7");
    assert_eq!(Coordinate::new(10, 10).unwrap().to_string(), "J10");
    assert_eq!(Coordinate::new(1, 1).unwrap().to_string(), "A1");
    assert_eq!(Coordinate::new(0, 1), None);
    assert_eq!(Coordinate::new(1, 11), None);
}

#[test]
fn test_valid_board_cell_accepts_exactly_canonical_strings() {
    let mut accepted = Vec::new();
    let letters = ('A'..='Z').chain('a'..='z').chain(['1', '@', ' ']);
    for letter in letters {
        for row in ["", "0", "1", "5", "9", "10", "11", "01", "010", "100", " 1", "1 "] {
            let text = format!("{}{}", letter, row);
            if is_valid_board_cell(&text) {
                accepted.push(text);
            }
        }
    }
    let expected: Vec<String> = ('A'..='J')
        .flat_map(|l| ["1", "5", "9", "10"].map(|r| format!("{}{}", l, r)))
        .collect();
    accepted.sort();
    let mut expected_sorted = expected.clone();
    expected_sorted.sort();
    assert_eq!(accepted, expected_sorted);

    for text in Coordinate::all().map(|c| c.to_string()) {
        assert!(is_valid_board_cell(&text), "{} rejected", text);
    }
}

#[test]
fn test_rejections() {
    for text in ["K1", "A0", "A11", "", "1A", " ", "A", "A10 ", "a1", "J100", "AA1"] {
        assert!(!is_valid_board_cell(text), "{:?} accepted", text);
    }
    assert_eq!(coordinate_from_text(""), Err(CoordinateError::Empty));
    assert_eq!(coordinate_from_text("K1"), Err(CoordinateError::ColumnOutOfRange('K')));
    assert_eq!(coordinate_from_text("A0"), Err(CoordinateError::RowOutOfRange));
    assert_eq!(coordinate_from_text("A100"), Err(CoordinateError::BadLength(4)));
}

#[test]
fn test_adjacency() {
    let d5 = coordinate_from_text("D5").unwrap();
    let around: Vec<String> = d5.neighbors().map(|c| c.to_string()).collect();
    assert_eq!(around, ["C4", "D4", "E4", "C5", "E5", "C6", "D6", "E6"]);
    for n in d5.neighbors() {
        assert!(d5.is_adjacent(&n));
    }
    assert!(!d5.is_adjacent(&d5));
    assert!(!d5.is_adjacent(&coordinate_from_text("D7").unwrap()));

    let ortho: Vec<String> = d5.orthogonal_neighbors().map(|c| c.to_string()).collect();
    assert_eq!(ortho, ["D4", "D6", "C5", "E5"]);
}

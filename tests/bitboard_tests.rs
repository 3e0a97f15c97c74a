use sea_battle::{BitBoard, BitBoardError, Position};

#[test]
fn test_insert_and_contains() {
    let mut bb = BitBoard::<u16, 4>::new();
    assert!(bb.is_empty());

    bb.insert(Position::new(1, 2)).unwrap();
    assert!(bb.contains(Position::new(1, 2)).unwrap());
    assert!(!bb.contains(Position::new(2, 1)).unwrap());
    assert_eq!(bb.count_ones(), 1);

    bb.clear_all();
    assert!(bb.is_empty());
}

#[test]
fn test_out_of_bounds_positions() {
    let mut bb = BitBoard::<u16, 4>::new();
    assert_eq!(
        bb.insert(Position::new(4, 0)),
        Err(BitBoardError::OutOfBounds(Position::new(4, 0)))
    );
    assert!(bb.contains(Position::new(-1, 0)).is_err());
}

#[test]
fn test_from_positions_and_iter() {
    let bb = BitBoard::<u16, 4>::from_positions([Position::new(3, 3), Position::new(0, 1)])
        .unwrap();
    let cells: Vec<_> = bb.iter().collect();
    assert_eq!(cells, vec![Position::new(0, 1), Position::new(3, 3)]);

    let other = BitBoard::<u16, 4>::from_positions([Position::new(0, 1)]).unwrap();
    assert_eq!((bb & other).count_ones(), 1);
    assert_eq!((bb | other).count_ones(), 2);
}

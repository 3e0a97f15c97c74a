use sea_battle::{
    Cell, Grid, Orientation, PlacementError, Position, ShotError, ShotOutcome, Vessel,
};

fn vessel(x: i32, y: i32, len: usize, orientation: Orientation) -> Vessel {
    Vessel::new(Position::new(x, y), len, orientation).unwrap()
}

#[test]
fn test_hit_hit_sink_scenario() {
    let mut grid = Grid::<6>::new();
    grid.place_vessel(vessel(0, 0, 3, Orientation::Horizontal)).unwrap();
    let cells: Vec<_> = grid.vessels()[0].occupied_cells().collect();
    assert_eq!(
        cells,
        vec![Position::new(0, 0), Position::new(1, 0), Position::new(2, 0)]
    );

    assert_eq!(grid.resolve_shot(Position::new(0, 0)), Ok(ShotOutcome::HitNotSunk));
    assert_eq!(
        grid.resolve_shot(Position::new(0, 0)),
        Err(ShotError::AlreadyTargeted(Position::new(0, 0)))
    );
    assert_eq!(grid.resolve_shot(Position::new(1, 0)), Ok(ShotOutcome::HitNotSunk));
    assert_eq!(grid.sunk_count(), 0);
    assert_eq!(grid.resolve_shot(Position::new(2, 0)), Ok(ShotOutcome::Sunk));
    assert_eq!(grid.sunk_count(), 1);
    assert_eq!(grid.vessels()[0].hit_points(), 0);
}

#[test]
fn test_shot_off_the_board() {
    let mut grid = Grid::<6>::new();
    assert_eq!(
        grid.resolve_shot(Position::new(6, 0)),
        Err(ShotError::OutOfBounds(Position::new(6, 0)))
    );
    assert_eq!(
        grid.resolve_shot(Position::new(0, -1)),
        Err(ShotError::OutOfBounds(Position::new(0, -1)))
    );
}

#[test]
fn test_miss_marks_cell() {
    let mut grid = Grid::<6>::new();
    grid.place_vessel(vessel(0, 0, 1, Orientation::Vertical)).unwrap();
    assert_eq!(grid.resolve_shot(Position::new(5, 5)), Ok(ShotOutcome::Missed));
    assert_eq!(grid.cell(Position::new(5, 5)), Some(Cell::Miss));
    assert!(grid.is_targeted(Position::new(5, 5)));
}

#[test]
fn test_adjacent_placement_rejected_without_mutation() {
    let mut grid = Grid::<6>::new();
    grid.place_vessel(vessel(0, 0, 3, Orientation::Horizontal)).unwrap();
    let before = grid.clone();

    for (x, y) in [(3, 0), (3, 1), (1, 1)] {
        assert_eq!(
            grid.place_vessel(vessel(x, y, 1, Orientation::Vertical)),
            Err(PlacementError::PlacementInvalid {
                origin: Position::new(x, y)
            })
        );
        assert_eq!(grid, before);
    }

    // overlapping the vessel itself
    assert!(grid.place_vessel(vessel(1, 0, 2, Orientation::Vertical)).is_err());
    assert_eq!(grid, before);

    grid.place_vessel(vessel(4, 0, 2, Orientation::Vertical)).unwrap();
    assert_eq!(grid.vessels().len(), 2);
}

#[test]
fn test_out_of_bounds_placement_rejected() {
    let mut grid = Grid::<6>::new();
    let before = grid.clone();
    assert!(grid.place_vessel(vessel(5, 0, 3, Orientation::Horizontal)).is_err());
    assert!(grid.place_vessel(vessel(0, 4, 3, Orientation::Vertical)).is_err());
    assert!(grid.place_vessel(vessel(-1, 0, 1, Orientation::Vertical)).is_err());
    assert_eq!(grid, before);
}

#[test]
fn test_placement_reserves_buffer() {
    let mut grid = Grid::<6>::new();
    grid.place_vessel(vessel(2, 2, 2, Orientation::Vertical)).unwrap();
    assert_eq!(grid.cell(Position::new(2, 2)), Some(Cell::Ship));
    assert_eq!(grid.cell(Position::new(2, 3)), Some(Cell::Ship));
    assert_eq!(grid.cell(Position::new(1, 1)), Some(Cell::Buffer));
    assert_eq!(grid.cell(Position::new(3, 4)), Some(Cell::Buffer));
    assert_eq!(grid.cell(Position::new(4, 4)), Some(Cell::Empty));
    assert!(grid.is_occupied(Position::new(1, 4)));
    assert!(!grid.is_occupied(Position::new(0, 0)));
    assert_eq!(grid.cell(Position::new(6, 6)), None);
}

#[test]
fn test_sink_reveals_buffer_as_targeted() {
    let mut grid = Grid::<6>::new();
    grid.place_vessel(vessel(0, 0, 1, Orientation::Horizontal)).unwrap();
    assert_eq!(grid.resolve_shot(Position::new(0, 0)), Ok(ShotOutcome::Sunk));

    for pos in [Position::new(0, 1), Position::new(1, 0), Position::new(1, 1)] {
        assert_eq!(grid.cell(pos), Some(Cell::Miss));
        assert_eq!(grid.resolve_shot(pos), Err(ShotError::AlreadyTargeted(pos)));
    }
    assert_eq!(grid.cell(Position::new(2, 2)), Some(Cell::Empty));
}

#[test]
fn test_reset_keeps_reservations() {
    let mut grid = Grid::<6>::new();
    grid.place_vessel(vessel(0, 0, 2, Orientation::Horizontal)).unwrap();
    grid.resolve_shot(Position::new(5, 5)).unwrap();
    grid.reset_targeting_memory();

    assert!(!grid.is_targeted(Position::new(5, 5)));
    assert!(grid.is_occupied(Position::new(2, 0)));
    assert!(grid
        .place_vessel(vessel(2, 1, 1, Orientation::Horizontal))
        .is_err());
}

#[test]
fn test_render_empty_grid() {
    let grid = Grid::<6>::new();
    let expected = " |1|2|3|4|5|6\n\
                    1|O|O|O|O|O|O|\n\
                    2|O|O|O|O|O|O|\n\
                    3|O|O|O|O|O|O|\n\
                    4|O|O|O|O|O|O|\n\
                    5|O|O|O|O|O|O|\n\
                    6|O|O|O|O|O|O|";
    assert_eq!(grid.to_display_string(), expected);
}

#[test]
fn test_render_ships_hits_and_misses() {
    let mut grid = Grid::<3>::new();
    grid.place_vessel(vessel(0, 0, 2, Orientation::Vertical)).unwrap();
    grid.resolve_shot(Position::new(0, 0)).unwrap();
    grid.resolve_shot(Position::new(2, 2)).unwrap();
    let expected = " |1|2|3\n\
                    1|X|■|O|\n\
                    2|O|O|O|\n\
                    3|O|O|.|";
    assert_eq!(grid.to_string(), expected);

    grid.set_concealed(true);
    assert!(grid.is_concealed());
    let hidden = grid.to_string();
    assert!(!hidden.contains('■'));
    assert!(hidden.contains("1|X|O|O|"));
}

#[test]
fn test_render_revealed_buffer_after_sink() {
    let mut grid = Grid::<3>::new();
    grid.place_vessel(vessel(1, 1, 1, Orientation::Vertical)).unwrap();
    grid.resolve_shot(Position::new(1, 1)).unwrap();
    let expected = " |1|2|3\n\
                    1|.|.|.|\n\
                    2|.|X|.|\n\
                    3|.|.|.|";
    assert_eq!(grid.to_string(), expected);
}

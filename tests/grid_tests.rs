use sea_duel::{BoardError, Cell, Coordinate, Grid, Orientation, Phase, ShotOutcome, Vessel};

fn vessel(row: i32, col: i32, length: usize, orientation: Orientation) -> Vessel {
    Vessel::new(Coordinate::new(row, col), length, orientation).unwrap()
}

fn playing_grid(vessels: &[Vessel]) -> Grid {
    let mut grid = Grid::new();
    for v in vessels {
        grid.place_vessel(*v).unwrap();
    }
    grid.begin_play();
    grid
}

#[test]
fn test_single_vessel_sink_and_revealed_water() {
    let mut grid = playing_grid(&[vessel(0, 0, 1, Orientation::Horizontal)]);
    assert_eq!(grid.live_vessels(), 1);

    assert_eq!(grid.resolve_shot(Coordinate::new(0, 0)), Ok(ShotOutcome::Sunk));
    assert_eq!(grid.live_vessels(), 0);
    assert!(grid.is_defeated());

    // the sink revealed (0,1) as water next to the wreck
    assert_eq!(grid.cell(Coordinate::new(0, 1)), Some(Cell::Excluded));
    assert_eq!(
        grid.resolve_shot(Coordinate::new(0, 1)),
        Err(BoardError::AlreadyTargeted)
    );
    assert_eq!(grid.resolve_shot(Coordinate::new(3, 3)), Ok(ShotOutcome::Miss));
}

#[test]
fn test_shot_before_sink_next_to_vessel_is_a_miss() {
    let mut grid = playing_grid(&[vessel(0, 0, 1, Orientation::Horizontal)]);
    assert_eq!(grid.resolve_shot(Coordinate::new(0, 1)), Ok(ShotOutcome::Miss));
    assert_eq!(grid.cell(Coordinate::new(0, 1)), Some(Cell::Miss));
    assert_eq!(grid.resolve_shot(Coordinate::new(0, 0)), Ok(ShotOutcome::Sunk));
    // the earlier miss keeps its marker
    assert_eq!(grid.cell(Coordinate::new(0, 1)), Some(Cell::Miss));
}

#[test]
fn test_hits_then_sunk_on_last_cell() {
    let mut grid = playing_grid(&[
        vessel(1, 1, 3, Orientation::Vertical),
        vessel(5, 5, 1, Orientation::Vertical),
    ]);
    assert_eq!(grid.resolve_shot(Coordinate::new(3, 1)), Ok(ShotOutcome::Hit));
    assert_eq!(grid.resolve_shot(Coordinate::new(1, 1)), Ok(ShotOutcome::Hit));
    assert_eq!(grid.live_vessels(), 2);
    assert_eq!(grid.resolve_shot(Coordinate::new(2, 1)), Ok(ShotOutcome::Sunk));
    assert_eq!(grid.live_vessels(), 1);
    assert!(!grid.is_defeated());
    assert!(grid.vessels()[0].is_sunk());
    assert_eq!(grid.vessels()[1].hit_points(), 1);
}

#[test]
fn test_repeated_shot_is_refused() {
    let mut grid = playing_grid(&[vessel(2, 2, 2, Orientation::Horizontal)]);
    assert_eq!(grid.resolve_shot(Coordinate::new(4, 4)), Ok(ShotOutcome::Miss));
    assert_eq!(
        grid.resolve_shot(Coordinate::new(4, 4)),
        Err(BoardError::AlreadyTargeted)
    );
    assert_eq!(grid.resolve_shot(Coordinate::new(2, 2)), Ok(ShotOutcome::Hit));
    assert_eq!(
        grid.resolve_shot(Coordinate::new(2, 2)),
        Err(BoardError::AlreadyTargeted)
    );
    assert_eq!(grid.vessels()[0].hit_points(), 1);
}

#[test]
fn test_out_of_bounds_shots() {
    let mut grid = playing_grid(&[vessel(0, 0, 1, Orientation::Horizontal)]);
    for c in [(-1, 0), (0, -1), (6, 0), (0, 6), (100, 100)] {
        assert_eq!(
            grid.resolve_shot(Coordinate::from(c)),
            Err(BoardError::OutOfBounds)
        );
    }
    assert!(grid.is_out_of_bounds(Coordinate::new(6, 5)));
    assert!(!grid.is_out_of_bounds(Coordinate::new(5, 5)));
}

#[test]
fn test_begin_play_clears_placement_exclusion() {
    let mut grid = Grid::new();
    grid.place_vessel(vessel(2, 2, 1, Orientation::Horizontal))
        .unwrap();
    assert!(grid.is_excluded(Coordinate::new(1, 1)));
    assert!(grid.is_excluded(Coordinate::new(2, 2)));

    grid.begin_play();
    assert_eq!(grid.phase(), Phase::Playing);
    assert!(!grid.is_excluded(Coordinate::new(1, 1)));
    assert_eq!(grid.resolve_shot(Coordinate::new(1, 1)), Ok(ShotOutcome::Miss));
    assert_eq!(grid.resolve_shot(Coordinate::new(2, 2)), Ok(ShotOutcome::Sunk));

    // a second call does not wipe shot memory
    grid.begin_play();
    assert_eq!(
        grid.resolve_shot(Coordinate::new(1, 1)),
        Err(BoardError::AlreadyTargeted)
    );
}

#[test]
fn test_placement_overlap_touch_and_bounds() {
    let mut grid = Grid::new();
    grid.place_vessel(vessel(2, 2, 2, Orientation::Horizontal))
        .unwrap();

    // overlap
    assert_eq!(
        grid.place_vessel(vessel(1, 3, 3, Orientation::Vertical)),
        Err(BoardError::InvalidPlacement)
    );
    // diagonal touch
    assert_eq!(
        grid.place_vessel(vessel(3, 4, 1, Orientation::Horizontal)),
        Err(BoardError::InvalidPlacement)
    );
    // leaves the board
    assert_eq!(
        grid.place_vessel(vessel(5, 4, 3, Orientation::Horizontal)),
        Err(BoardError::InvalidPlacement)
    );
    // one-cell gap is fine
    grid.place_vessel(vessel(4, 2, 2, Orientation::Horizontal))
        .unwrap();
    assert_eq!(grid.vessels().len(), 2);
    assert_eq!(grid.live_vessels(), 2);
}

#[test]
fn test_exclude_adjacent_modes_differ() {
    let v = vessel(3, 3, 1, Orientation::Horizontal);

    let mut setup = Grid::new();
    setup.exclude_adjacent(&v, false).unwrap();
    assert!(setup.is_excluded(Coordinate::new(2, 2)));
    assert_eq!(setup.cell(Coordinate::new(2, 2)), Some(Cell::Empty));
    assert!(!setup.is_targeted(Coordinate::new(2, 2)));

    let mut playing = Grid::new();
    playing.begin_play();
    playing.exclude_adjacent(&v, true).unwrap();
    assert!(playing.is_targeted(Coordinate::new(4, 4)));
    assert_eq!(playing.cell(Coordinate::new(4, 4)), Some(Cell::Excluded));
}

#[test]
fn test_hidden_flag() {
    let mut grid = Grid::new();
    assert!(!grid.is_hidden());
    grid.set_hidden(true);
    assert!(grid.is_hidden());
}

#[test]
fn test_grid_without_vessels_is_defeated() {
    let grid = playing_grid(&[]);
    assert!(grid.is_defeated());
}

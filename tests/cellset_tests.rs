use sea_duel::{CellSet, CellSetError, Coordinate};

type Cells = CellSet<u64, 6>;

#[test]
fn test_insert_and_contains() {
    let mut set = Cells::new();
    assert!(!set.contains(Coordinate::new(1, 1)));

    assert_eq!(set.insert(Coordinate::new(1, 1)), Ok(true));
    assert_eq!(set.insert(Coordinate::new(1, 1)), Ok(false));
    assert!(set.contains(Coordinate::new(1, 1)));
    assert!(!set.contains(Coordinate::new(1, 2)));

    // last cell of the board uses the highest board bit
    assert_eq!(set.insert(Coordinate::new(5, 5)), Ok(true));
    assert!(set.contains(Coordinate::new(5, 5)));
}

#[test]
fn test_clear_empties_the_set() {
    let mut set = Cells::new();
    set.insert(Coordinate::new(0, 0)).unwrap();
    set.insert(Coordinate::new(3, 4)).unwrap();
    set.clear();
    assert!(!set.contains(Coordinate::new(0, 0)));
    assert!(!set.contains(Coordinate::new(3, 4)));
    assert_eq!(set, Cells::new());
}

#[test]
fn test_off_board_coordinates() {
    let mut set = Cells::new();
    assert_eq!(
        set.insert(Coordinate::new(-1, 0)),
        Err(CellSetError { row: -1, col: 0 })
    );
    assert_eq!(
        set.insert(Coordinate::new(0, 6)),
        Err(CellSetError { row: 0, col: 6 })
    );
    assert!(!set.contains(Coordinate::new(6, 6)));
    assert!(!set.contains(Coordinate::new(-1, -1)));
    assert_eq!(set, Cells::new());
}

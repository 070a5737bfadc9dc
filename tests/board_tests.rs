use battleships::{Board, BoardError, Cell, Direction, Point, ShipType};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn place_out_of_board_fails_without_mutation() {
    let mut board = Board::new(10);
    for origin in [Point::new(0, 100), Point::new(100, 0)] {
        for dir in [Direction::Horizontal, Direction::Vertical] {
            assert_eq!(
                board.place_ship(ShipType::Battleship, dir, origin),
                Err(BoardError::ShipOutOfBounds)
            );
        }
    }
    assert_eq!(board.segment_count(), 0);
}

#[test]
fn place_overhanging_ship_fails() {
    let mut board = Board::new(10);
    // Battleship (5): the anchor rule rejects significant + 5 >= 10,
    // so 5 is rejected and 4 is the last valid anchor.
    assert_eq!(
        board.place_ship(ShipType::Battleship, Direction::Horizontal, Point::new(5, 0)),
        Err(BoardError::ShipOverhangs)
    );
    assert_eq!(
        board.place_ship(ShipType::Battleship, Direction::Vertical, Point::new(0, 5)),
        Err(BoardError::ShipOverhangs)
    );
    assert_eq!(board.segment_count(), 0);

    assert!(board
        .place_ship(ShipType::Battleship, Direction::Horizontal, Point::new(4, 0))
        .is_ok());
    assert_eq!(board.segment_count(), 5);
}

#[test]
fn place_crossing_ship_fails_with_no_partial_write() {
    let mut board = Board::new(10);
    board
        .place_ship(ShipType::Destroyer, Direction::Horizontal, Point::new(2, 2))
        .unwrap();
    let before = board.clone();

    // Vertical battleship through (2,0)..(2,4) crosses the destroyer at (2,2).
    assert_eq!(
        board.place_ship(ShipType::Battleship, Direction::Vertical, Point::new(2, 0)),
        Err(BoardError::ShipOverlaps)
    );
    assert_eq!(board, before);
}

#[test]
fn placed_ship_record_covers_whole_ship() {
    for dir in [Direction::Horizontal, Direction::Vertical] {
        let mut board = Board::new(10);
        board
            .place_ship(ShipType::Battleship, dir, Point::new(0, 0))
            .unwrap();

        assert_eq!(board.ships().len(), 1);
        let record = &board.ships()[0];
        assert_eq!(record.kind(), ShipType::Battleship);
        assert_eq!(record.cells().len(), ShipType::Battleship.length());

        // Every segment cell points back at the same arena entry.
        for &p in record.cells() {
            assert_eq!(board.cell(p), Some(Cell::Segment { ship: 0, hit: false }));
        }
        assert_eq!(board.segment_count(), ShipType::Battleship.length());
    }
}

#[test]
fn generated_board_has_expected_ships() {
    let fleets: [&[ShipType]; 2] = [
        &[ShipType::Battleship, ShipType::Destroyer],
        &[ShipType::Destroyer, ShipType::Destroyer],
    ];
    let mut rng = SmallRng::seed_from_u64(42);

    for fleet in fleets {
        let board = Board::generate(10, fleet, &mut rng).unwrap();
        let expected: usize = fleet.iter().map(|s| s.length()).sum();
        assert_eq!(board.segment_count(), expected);
        assert_eq!(board.ships().len(), fleet.len());
        for (&kind, record) in fleet.iter().zip(board.ships()) {
            assert_eq!(record.kind(), kind);
            assert_eq!(record.cells().len(), kind.length());
        }
    }
}

#[test]
fn infeasible_fleet_is_rejected_up_front() {
    let mut rng = SmallRng::seed_from_u64(1);

    // A battleship needs an anchor range; a 5-board leaves none under the
    // overhang rule.
    assert_eq!(
        Board::generate(5, &[ShipType::Battleship], &mut rng),
        Err(BoardError::InfeasibleFleet)
    );

    // More ship cells than half the board capacity.
    let fleet = [ShipType::Destroyer; 7];
    assert_eq!(
        Board::generate(5, &fleet, &mut rng),
        Err(BoardError::InfeasibleFleet)
    );
}

use hotseat_battleship::{Board, BoardError, CellPos, Orientation, Player, PlayerId};

fn player() -> Player {
    Player::new(PlayerId::One, Board::new(10, 50.0, (0.0, 0.0)))
}

fn center(p: &Player, col: usize, row: usize) -> (f32, f32) {
    p.board().cell_center(CellPos::new(col, row))
}

#[test]
fn test_rotate_cycles_n_e_s_w() {
    let mut p = player();
    assert_eq!(p.orientation(), Orientation::N);
    assert_eq!(p.rotate_ship(), Orientation::E);
    assert_eq!(p.rotate_ship(), Orientation::S);
    assert_eq!(p.rotate_ship(), Orientation::W);
    assert_eq!(p.rotate_ship(), Orientation::N);
}

#[test]
fn test_place_uses_current_orientation() {
    let mut p = player();
    p.rotate_ship(); // E
    let (x, y) = center(&p, 2, 5);
    let id = p.place_ship_at(x, y, 3).unwrap();
    assert_eq!(
        p.board().ship(id).unwrap().cells(),
        &[CellPos::new(2, 5), CellPos::new(3, 5), CellPos::new(4, 5)]
    );
    assert_eq!(p.placed_ships(), &[id]);
}

#[test]
fn test_place_outside_board_or_duplicate_length() {
    let mut p = player();
    assert_eq!(p.place_ship_at(-5.0, 10.0, 1).unwrap_err(), BoardError::OutOfBounds);

    let (x, y) = center(&p, 0, 0);
    p.place_ship_at(x, y, 1).unwrap();
    let (x, y) = center(&p, 5, 5);
    assert_eq!(p.place_ship_at(x, y, 1).unwrap_err(), BoardError::ShipAlreadyPlaced);
    assert_eq!(p.placed_count(), 1);
}

#[test]
fn test_next_ship_length_fills_gaps() {
    let mut p = player();
    assert_eq!(p.next_ship_length(3), Some(1));
    let (x, y) = center(&p, 0, 9);
    p.place_ship_at(x, y, 1).unwrap();
    assert_eq!(p.next_ship_length(3), Some(2));
    let (x, y) = center(&p, 3, 9);
    p.place_ship_at(x, y, 2).unwrap();
    let (x, y) = center(&p, 6, 9);
    p.place_ship_at(x, y, 3).unwrap();
    assert_eq!(p.next_ship_length(3), None);
    assert!(p.is_ready(3));

    // retracting the length-2 ship makes it the next one again
    let (x, y) = center(&p, 3, 8);
    assert!(p.delete_ship_at(x, y));
    assert_eq!(p.next_ship_length(3), Some(2));
    assert!(!p.is_ready(3));
}

#[test]
fn test_delete_clears_cells_and_registry() {
    let mut p = player();
    let (x, y) = center(&p, 4, 4);
    p.place_ship_at(x, y, 1).unwrap();
    assert!(p.delete_ship_at(x, y));
    assert_eq!(p.placed_count(), 0);
    assert_eq!(p.board().ship_count(), 0);
    assert!(p.board().cells().all(|c| c.ship().is_none()));
    assert!(!p.delete_ship_at(x, y));
}

#[test]
fn test_fire_at_own_board() {
    let mut p = player();
    let (x, y) = center(&p, 1, 1);
    p.place_ship_at(x, y, 1).unwrap();

    let report = p.fire_at(x, y).unwrap();
    assert!(report.is_hit());
    assert!(report.sunk);
    assert!(p.all_ships_sunk());
    assert_eq!(p.fire_at(x, y).unwrap_err(), BoardError::AlreadyFired);
    assert_eq!(p.fire_at(1000.0, 1000.0).unwrap_err(), BoardError::OutOfBounds);
}

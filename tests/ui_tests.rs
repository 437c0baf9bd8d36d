use hotseat_battleship::{
    Board, CellPos, Orientation, PlayerId, Presenter, Sound, TerminalPresenter, Variant,
};

fn board_with_ship() -> Board {
    let mut board = Board::new(4, 10.0, (0.0, 0.0));
    board
        .place_ship(1, 1, 2, Orientation::E)
        .expect("ship fits");
    board
}

fn output(presenter: TerminalPresenter<Vec<u8>>) -> String {
    String::from_utf8(presenter.into_inner()).unwrap()
}

#[test]
fn test_own_board_reveals_ships() {
    let mut ui = TerminalPresenter::new(Vec::new());
    ui.render_board(PlayerId::One, &board_with_ship(), false);
    let text = output(ui);
    assert!(text.contains("Player 1\n"));
    assert!(text.contains("      A B C D\n"));
    assert!(text.contains("    2 . S S ."));
    assert!(text.contains("ships sunk: 0/1"));
}

#[test]
fn test_opponent_board_hides_afloat_ships() {
    let mut board = board_with_ship();
    board.fire(CellPos::new(1, 1)).unwrap();
    board.fire(CellPos::new(0, 0)).unwrap();

    let mut ui = TerminalPresenter::new(Vec::new());
    ui.render_board(PlayerId::Two, &board, true);
    let text = output(ui);
    assert!(text.contains("Player 2 (hidden)"));
    assert!(text.contains("    1 o . . ."));
    assert!(text.contains("    2 . X . ."));
}

#[test]
fn test_sunk_ship_shown_on_hidden_board() {
    let mut board = Board::new(3, 10.0, (0.0, 0.0));
    board.place_ship(0, 0, 1, Orientation::N).unwrap();
    board.place_ship(2, 2, 1, Orientation::N).unwrap();
    board.fire(CellPos::new(0, 0)).unwrap();

    let mut ui = TerminalPresenter::new(Vec::new());
    ui.render_board(PlayerId::Two, &board, true);
    let text = output(ui);
    assert!(text.contains("    1 X . ."));
    assert!(text.contains("    3 . . ."));
    assert!(text.contains("ships sunk: 1/2"));
}

#[test]
fn test_ghost_drawn_until_next_label() {
    let board = Board::new(3, 10.0, (0.0, 0.0));
    let mut ui = TerminalPresenter::new(Vec::new());
    ui.render_label("Player 1's Setup");
    ui.render_ghost_preview(PlayerId::One, &[CellPos::new(0, 1), CellPos::new(1, 1)]);
    ui.render_board(PlayerId::One, &board, false);
    ui.render_board(PlayerId::Two, &board, true);
    ui.render_label("Player 1's Setup");
    ui.render_board(PlayerId::One, &board, false);
    let text = output(ui);

    assert!(text.starts_with("\n=== Player 1's Setup ===\n"));
    assert_eq!(text.matches("    2 + + .").count(), 1);
    assert_eq!(text.matches("    2 . . .").count(), 2);
}

#[test]
fn test_messages_and_cues() {
    let mut ui = TerminalPresenter::new(Vec::new());
    ui.render_timer(7);
    ui.show_confirm("Next turn", "Hand over");
    ui.notify("Miss!", Variant::Danger);
    ui.play_sound(Sound::Sunk);
    ui.navigate_to_game_over(Some(PlayerId::Two));
    let text = output(ui);
    assert!(text.contains("  Time: 7\n"));
    assert!(text.contains("[Next turn] Hand over (y/n)"));
    assert!(text.contains("  [!!] Miss!"));
    assert!(text.contains("*glug glug*"));
    assert!(text.contains("*** Player 2 wins! ***"));
}

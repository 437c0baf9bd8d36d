use hotseat_battleship::{ConfigError, Coordinator, GameConfig, PlayerId, TerminalPresenter};

#[test]
fn test_default_config_is_valid() {
    let config = GameConfig::default();
    assert_eq!(config.board_size, 10);
    assert_eq!(config.turn_seconds, 20);
    assert_eq!((config.min_ships, config.max_ships), (1, 5));
    assert_eq!(config.validate(), Ok(()));
}

#[test]
fn test_ship_bound_guards() {
    let zero_min = GameConfig {
        min_ships: 0,
        ..GameConfig::default()
    };
    assert_eq!(zero_min.validate(), Err(ConfigError::MinShipsNotPositive));

    let too_many = GameConfig {
        max_ships: 11,
        ..GameConfig::default()
    };
    assert_eq!(
        too_many.validate(),
        Err(ConfigError::MaxShipsExceedBoard {
            max: 11,
            board_size: 10
        })
    );

    let inverted = GameConfig {
        min_ships: 4,
        max_ships: 3,
        ..GameConfig::default()
    };
    assert_eq!(inverted.validate(), Err(ConfigError::MinAboveMax { min: 4, max: 3 }));
}

#[test]
fn test_zero_turn_length_rejected() {
    let no_time = GameConfig {
        turn_seconds: 0,
        ..GameConfig::default()
    };
    assert_eq!(no_time.validate(), Err(ConfigError::TurnSecondsZero));
    let one_second = GameConfig {
        turn_seconds: 1,
        ..GameConfig::default()
    };
    assert_eq!(one_second.validate(), Ok(()));
}

#[test]
fn test_coordinator_refuses_bad_config() {
    let config = GameConfig {
        max_ships: 20,
        ..GameConfig::default()
    };
    let err = Coordinator::new(config, TerminalPresenter::new(Vec::new())).err();
    assert!(matches!(err, Some(ConfigError::MaxShipsExceedBoard { .. })));
}

#[test]
fn test_board_origins_sit_either_side_of_centre() {
    let config = GameConfig::default();
    // 10 cells of 50px: half width 250
    assert_eq!(config.board_origin(PlayerId::One), (800.0 - 400.0 - 250.0, 450.0 - 250.0));
    assert_eq!(config.board_origin(PlayerId::Two), (800.0 + 400.0 - 250.0, 450.0 - 250.0));
}

#[test]
fn test_partial_json_fills_defaults() {
    let config: GameConfig =
        serde_json::from_str(r#"{ "board_size": 8, "turn_seconds": 30, "rotate_key": "t" }"#)
            .unwrap();
    assert_eq!(config.board_size, 8);
    assert_eq!(config.turn_seconds, 30);
    assert_eq!(config.rotate_key, 't');
    assert_eq!(config.delete_key, 'x');
    assert_eq!(config.resolving_delay_ms, 2000);
}

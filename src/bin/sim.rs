use hotseat_battleship::{
    Board, CellPos, Coordinator, GameConfig, Phase, PlayerId, Presenter, Prompt, Sound, Variant,
};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde_json::json;

/// Presenter that only counts what a real front end would show.
#[derive(Default)]
struct Tally {
    prompts: usize,
    sounds: usize,
    notices: usize,
}

impl Presenter for Tally {
    fn render_board(&mut self, _owner: PlayerId, _board: &Board, _mask_ships: bool) {}
    fn render_label(&mut self, _text: &str) {}
    fn render_timer(&mut self, _remaining_seconds: u64) {}
    fn render_ghost_preview(&mut self, _owner: PlayerId, _cells: &[CellPos]) {}
    fn show_confirm(&mut self, _title: &str, _message: &str) {
        self.prompts += 1;
    }
    fn show_choice(&mut self, _min: usize, _max: usize) {
        self.prompts += 1;
    }
    fn notify(&mut self, _message: &str, _variant: Variant) {
        self.notices += 1;
    }
    fn play_sound(&mut self, _sound: Sound) {
        self.sounds += 1;
    }
    fn navigate_to_game_over(&mut self, _winner: Option<PlayerId>) {}
    fn navigate_back(&mut self) {}
}

const TICK_MS: u64 = 250;
const MAX_STEPS: usize = 100_000;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <seed> [ships]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let mut rng = SmallRng::seed_from_u64(seed);

    let config = GameConfig::default();
    let ships: usize = match args.get(2) {
        Some(arg) => arg.parse()?,
        None => rng.random_range(config.min_ships..=config.max_ships),
    };
    let size = config.board_size;
    let mut game = Coordinator::new(config, Tally::default())?;
    game.begin();

    let mut steps = 0;
    while !game.is_finished() && steps < MAX_STEPS {
        steps += 1;
        match game.awaiting() {
            Some(Prompt::Choice { .. }) => {
                game.resolve_choice(Some(ships));
            }
            Some(Prompt::Confirm) => {
                game.resolve_confirm(true);
            }
            None if game.is_resolving_turn() || game.phase() == Phase::GameOver => {
                game.tick(TICK_MS);
            }
            None => {
                let owner = match game.phase() {
                    Phase::Setup => game.current_player(),
                    _ => game.current_player().other(),
                };
                if game.phase() == Phase::Setup && rng.random_bool(0.3) {
                    game.handle_key_press(game.config().rotate_key);
                }
                let pos = CellPos::new(rng.random_range(0..size), rng.random_range(0..size));
                let (x, y) = game.player(owner).board().cell_center(pos);
                game.handle_click(x, y);
                game.tick(TICK_MS);
            }
        }
    }

    let snapshot = game.snapshot();
    let tally = game.presenter();
    let result = json!({
        "seed": seed,
        "ships_per_player": ships,
        "steps": steps,
        "winner": snapshot.winner.map(|p| p.number()),
        "snapshot": snapshot,
        "prompts": tally.prompts,
        "sounds": tally.sounds,
        "notices": tally.notices,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}

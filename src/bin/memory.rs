//! Terminal front-end for the memory-match engine.
//!
//! Cards are numbered slots. Pick two per turn by number; matched pairs
//! stay up, mismatches flip back after a pause.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use colored::Colorize;
use dialoguer::Input;
use log::info;

use memory_match::cards::{Card, CardId, FaceCatalog, FaceDefinition, CARD_BACK_IMAGE};
use memory_match::core::GameConfig;
use memory_match::game::{
    prompt_card_amount, prompt_restart, BoardView, ClickOutcome, GameController, GamePhase,
    Notifier, Prompter, RestartDecision,
};

#[derive(Parser, Debug)]
#[command(name = "memory")]
struct Args {
    /// RNG seed; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// JSON config file; missing fields take their defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Smallest card count a player may ask for
    #[arg(long)]
    min_cards: Option<usize>,

    /// How long a mismatched pair stays up (milliseconds)
    #[arg(long)]
    mismatch_ms: Option<u64>,

    /// Pause before the win announcement (milliseconds)
    #[arg(long)]
    win_ms: Option<u64>,

    /// Directory face images are served from
    #[arg(long)]
    faces_dir: Option<String>,
}

impl Args {
    fn game_config(&self) -> Result<GameConfig, Box<dyn std::error::Error>> {
        let mut config = match &self.config {
            Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
            None => GameConfig::default(),
        };
        if let Some(min) = self.min_cards {
            config = config.with_min_card_amount(min);
        }
        if let Some(ms) = self.mismatch_ms {
            config = config.with_mismatch_delay_ms(ms);
        }
        if let Some(ms) = self.win_ms {
            config = config.with_win_delay_ms(ms);
        }
        Ok(config)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SlotState {
    Down,
    Up,
    Matched,
}

#[derive(Debug)]
struct Slot {
    id: CardId,
    label: String,
    state: SlotState,
}

/// Board, counters, and announcements rendered to stdout.
#[derive(Debug, Default)]
struct TerminalView {
    slots: Vec<Slot>,
    flips: u32,
    seconds: u64,
}

impl TerminalView {
    fn slot_mut(&mut self, id: CardId) -> Option<&mut Slot> {
        self.slots.iter_mut().find(|slot| slot.id == id)
    }

    fn set_state(&mut self, id: CardId, state: SlotState) {
        if let Some(slot) = self.slot_mut(id) {
            slot.state = state;
        }
    }

    fn render(&self) {
        println!();
        println!(
            "{}  {}",
            format!("flips {}", self.flips).cyan(),
            format!("time {}s", self.seconds).cyan()
        );
        for (n, slot) in self.slots.iter().enumerate() {
            let face = match slot.state {
                SlotState::Down => "??".dimmed().to_string(),
                SlotState::Up => slot.label.yellow().to_string(),
                SlotState::Matched => slot.label.green().to_string(),
            };
            println!("{:>3}  {face}", n + 1);
        }
    }
}

impl BoardView for TerminalView {
    fn clear_board(&mut self) {
        self.slots.clear();
    }

    fn create_card(&mut self, card: &Card, face: &FaceDefinition, image_path: &str) {
        info!("{}: {image_path} (back {CARD_BACK_IMAGE})", card.id);
        let label = face
            .name
            .rsplit_once('.')
            .map_or(face.name.as_str(), |(stem, _)| stem);
        self.slots.push(Slot {
            id: card.id,
            label: label.chars().take(8).collect(),
            state: SlotState::Down,
        });
    }

    fn set_flip_counter(&mut self, flips: u32) {
        self.flips = flips;
    }

    fn set_timer(&mut self, elapsed_secs: u64) {
        self.seconds = elapsed_secs;
    }

    fn flip(&mut self, card: CardId) {
        self.set_state(card, SlotState::Up);
    }

    fn unflip(&mut self, card: CardId) {
        self.set_state(card, SlotState::Down);
    }

    fn mark_matched(&mut self, card: CardId) {
        self.set_state(card, SlotState::Matched);
    }
}

impl Notifier for TerminalView {
    fn announce(&mut self, message: &str) {
        self.render();
        println!("\n{}\n", message.bold().green());
    }
}

/// Reads answers from the terminal.
struct Terminal;

impl Prompter for Terminal {
    fn ask_integer(&mut self, prompt: &str) -> Option<String> {
        Input::<String>::new()
            .with_prompt(prompt)
            .interact_text()
            .ok()
    }

    fn ask_yes_no(&mut self, prompt: &str) -> Option<String> {
        Input::<String>::new()
            .with_prompt(prompt)
            .interact_text()
            .ok()
    }
}

/// Feeds wall-clock time into the controller's virtual clock.
struct RealTime {
    last: Instant,
}

impl RealTime {
    fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    fn catch_up(&mut self, game: &mut GameController<TerminalView>) {
        let now = Instant::now();
        game.advance(now - self.last);
        self.last = now;
    }

    fn wait(&mut self, game: &mut GameController<TerminalView>, delay: Duration) {
        std::thread::sleep(delay);
        self.catch_up(game);
    }
}

fn play_turns(game: &mut GameController<TerminalView>) {
    let mut time = RealTime::new();

    while game.phase() == GamePhase::Playing {
        time.catch_up(game);
        game.ui().render();

        let Ok(answer) = Input::<String>::new()
            .with_prompt("Card")
            .interact_text()
        else {
            return;
        };
        time.catch_up(game);

        let position = match answer.trim().parse::<usize>() {
            Ok(n) if n >= 1 => n - 1,
            _ => {
                println!("{}", "enter a card number".red());
                continue;
            }
        };

        match game.on_position_clicked(position) {
            Ok(ClickOutcome::Mismatched) => {
                game.ui().render();
                let delay = game.config().mismatch_delay();
                time.wait(game, delay);
            }
            Ok(ClickOutcome::Matched { complete: true }) => {
                let delay = game.config().win_delay();
                time.wait(game, delay);
            }
            Ok(ClickOutcome::Ignored) => println!("{}", "that card is already up".red()),
            Ok(_) => {}
            Err(err) => println!("{}", err.to_string().red()),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let config = args.game_config()?;
    let mut catalog = FaceCatalog::standard();
    if let Some(dir) = &args.faces_dir {
        catalog = catalog.with_directory(dir.clone());
    }
    let seed = args.seed.unwrap_or_else(rand::random::<u64>);
    info!("seed {seed}");

    let mut game = GameController::new(config, catalog, seed, TerminalView::default())?;
    let mut terminal = Terminal;

    loop {
        prompt_card_amount(&mut game, &mut terminal)?;
        play_turns(&mut game);
        if game.phase() != GamePhase::Finished {
            return Ok(());
        }
        if prompt_restart(&mut game, &mut terminal)? == RestartDecision::Quit {
            return Ok(());
        }
    }
}

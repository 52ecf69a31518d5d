//! Game controller: one object owning a whole play-through.
//!
//! ## Phases
//!
//! ```text
//! NotStarted ──request_start──▶ AwaitingCardCount ──submit_card_amount──▶ Playing
//!                                      ▲                                     │
//!                                      │ affirmative                   board complete
//!                                      │                                     ▼
//!                 Closed ◀──negative── Finished ◀──────── win announcement ──┘
//! ```
//!
//! ## Turns
//!
//! Each click on a hidden card reveals it. The second reveal of a turn is
//! judged at once: a match stays up, a mismatch is put in `Resolving` and a
//! flip-back task is scheduled. When the last pair is matched the win
//! announcement is scheduled after a short delay.
//!
//! ## Time
//!
//! Nothing happens between calls. The host moves time forward with
//! [`GameController::advance`], which runs due tasks in order. Every task
//! is tagged with the session that scheduled it; tasks from an earlier
//! session are dropped when they come due.

use std::time::Duration;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::collaborators::{BoardView, Notifier};
use crate::cards::{build_board, AmountBounds, Board, CardAmount, CardId, FaceCatalog};
use crate::clock::{GameClock, ScheduledTask, TaskQueue};
use crate::core::{GameConfig, GameRng, GameSummary, SessionId};
use crate::error::{GameError, Result};
use crate::rules::{evaluate, MatchOutcome};
use crate::selection::{Selection, SelectionTracker};

/// Controller phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Created, no start requested yet.
    NotStarted,
    /// Waiting for a valid card count.
    AwaitingCardCount,
    /// A board is in play.
    Playing,
    /// Won and announced; waiting for the restart answer.
    Finished,
    /// Player declined a new game.
    Closed,
}

impl std::fmt::Display for GamePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GamePhase::NotStarted => "not started",
            GamePhase::AwaitingCardCount => "awaiting card count",
            GamePhase::Playing => "playing",
            GamePhase::Finished => "finished",
            GamePhase::Closed => "closed",
        };
        f.write_str(name)
    }
}

/// What a click did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Card was not hidden; nothing changed.
    Ignored,
    /// First card of the turn is up.
    Revealed,
    /// Second card matched the first. `complete` when it was the last pair.
    Matched { complete: bool },
    /// Second card did not match; both flip back after the delay.
    Mismatched,
}

/// Answer to the restart question.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RestartDecision {
    Restart,
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum GameTask {
    Tick,
    FlipBack(CardId, CardId),
    AnnounceWin,
}

/// Orchestrates sessions, turns, timing, and the end of the game.
///
/// ## Example
///
/// ```
/// use std::time::Duration;
/// use memory_match::cards::FaceCatalog;
/// use memory_match::core::GameConfig;
/// use memory_match::game::{GameController, GamePhase, Headless};
///
/// let mut game = GameController::new(GameConfig::default(), FaceCatalog::standard(), 42, Headless).unwrap();
///
/// game.request_start().unwrap();
/// assert!(game.submit_card_amount("5").is_err());
/// game.submit_card_amount("4").unwrap();
/// assert_eq!(game.phase(), GamePhase::Playing);
/// assert_eq!(game.board().len(), 4);
///
/// game.advance(Duration::from_secs(3));
/// assert_eq!(game.elapsed_secs(), 3);
/// ```
#[derive(Debug)]
pub struct GameController<U> {
    config: GameConfig,
    catalog: FaceCatalog,
    bounds: AmountBounds,
    rng: GameRng,
    ui: U,
    phase: GamePhase,
    session: SessionId,
    board: Board,
    tracker: SelectionTracker,
    clock: GameClock,
    queue: TaskQueue<GameTask>,
    summary: Option<GameSummary>,
}

impl<U: BoardView + Notifier> GameController<U> {
    /// Create a controller.
    ///
    /// Fails if the config is invalid or the catalog cannot fill the
    /// configured minimum board.
    pub fn new(config: GameConfig, catalog: FaceCatalog, seed: u64, ui: U) -> Result<Self> {
        config.validate()?;
        let bounds = AmountBounds::for_catalog(&config, &catalog)?;
        let clock = GameClock::new(config.tick_interval());

        Ok(Self {
            config,
            catalog,
            bounds,
            rng: GameRng::new(seed),
            ui,
            phase: GamePhase::NotStarted,
            session: SessionId::default(),
            board: Board::default(),
            tracker: SelectionTracker::new(),
            clock,
            queue: TaskQueue::new(),
            summary: None,
        })
    }

    // === Accessors ===

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Current session. `SessionId(0)` before the first game.
    #[must_use]
    pub fn session(&self) -> SessionId {
        self.session
    }

    /// Current board. Cloning it is O(1).
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn catalog(&self) -> &FaceCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn bounds(&self) -> AmountBounds {
        self.bounds
    }

    #[must_use]
    pub fn flips(&self) -> u32 {
        self.tracker.flips()
    }

    #[must_use]
    pub fn elapsed_secs(&self) -> u64 {
        self.clock.elapsed_secs()
    }

    #[must_use]
    pub fn clock_running(&self) -> bool {
        self.clock.is_running()
    }

    /// Card waiting for its partner this turn.
    #[must_use]
    pub fn pending(&self) -> Option<CardId> {
        self.tracker.pending()
    }

    /// Virtual time since the controller was created.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.queue.now()
    }

    /// Numbers for the last completed game, while `Finished`.
    #[must_use]
    pub fn summary(&self) -> Option<GameSummary> {
        self.summary
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }

    pub fn ui_mut(&mut self) -> &mut U {
        &mut self.ui
    }

    pub fn into_ui(self) -> U {
        self.ui
    }

    // === Prompts ===

    /// Question asked while `AwaitingCardCount`.
    #[must_use]
    pub fn card_amount_prompt(&self) -> String {
        format!(
            "How many cards do you want to play with? Enter an even number between {} and {}",
            self.bounds.min, self.bounds.max
        )
    }

    /// Question asked while `Finished`.
    #[must_use]
    pub fn restart_prompt(&self) -> String {
        format!(
            "Play again? (answer {} or {})",
            self.config.affirmative, self.config.negative
        )
    }

    // === Session lifecycle ===

    /// Ask for a new game. Idempotent while already waiting for a count.
    pub fn request_start(&mut self) -> Result<()> {
        match self.phase {
            GamePhase::NotStarted => {
                self.phase = GamePhase::AwaitingCardCount;
                Ok(())
            }
            GamePhase::AwaitingCardCount => Ok(()),
            phase => Err(GameError::WrongPhase {
                operation: "start",
                phase,
            }),
        }
    }

    /// Answer the card-count question.
    ///
    /// An invalid answer leaves the phase unchanged so the host can ask
    /// again. A valid one deals a new board and starts the clock.
    pub fn submit_card_amount(&mut self, input: &str) -> Result<CardAmount> {
        self.expect_phase(GamePhase::AwaitingCardCount, "card amount")?;

        let amount = match CardAmount::parse(input, self.bounds) {
            Ok(amount) => amount,
            Err(err) => {
                debug!("{err}");
                return Err(err);
            }
        };

        self.begin_session(amount)?;
        Ok(amount)
    }

    fn begin_session(&mut self, amount: CardAmount) -> Result<()> {
        let session = self.session.next();
        let mut session_rng = self.rng.fork();
        let board = build_board(amount, &self.catalog, session, &mut session_rng)?;

        self.clock.stop(&mut self.queue);
        self.session = session;
        self.board = board;
        self.tracker.reset();
        self.summary = None;

        self.ui.clear_board();
        self.ui.set_flip_counter(0);
        self.ui.set_timer(0);
        for card in self.board.iter() {
            if let (Some(face), Some(path)) =
                (self.catalog.get(card.face), self.catalog.image_path(card.face))
            {
                self.ui.create_card(card, face, &path);
            }
        }

        self.clock.start(&mut self.queue, session, GameTask::Tick);
        self.phase = GamePhase::Playing;

        info!(
            "{session}: started with {amount} cards (seed {})",
            session_rng.seed()
        );
        Ok(())
    }

    /// Answer the restart question.
    ///
    /// Only the configured literals are accepted, surrounding whitespace
    /// aside. Anything else leaves the phase unchanged.
    pub fn submit_restart(&mut self, input: &str) -> Result<RestartDecision> {
        self.expect_phase(GamePhase::Finished, "restart")?;

        let answer = input.trim();
        let decision = if answer == self.config.affirmative.trim() {
            RestartDecision::Restart
        } else if answer == self.config.negative.trim() {
            RestartDecision::Quit
        } else {
            debug!("rejected restart answer {input:?}");
            return Err(GameError::InvalidRestartResponse(input.to_string()));
        };

        self.phase = match decision {
            RestartDecision::Restart => GamePhase::AwaitingCardCount,
            RestartDecision::Quit => GamePhase::Closed,
        };
        info!("{}: restart decision {decision:?}", self.session);
        Ok(decision)
    }

    // === Turns ===

    /// Handle a click on a card.
    ///
    /// Clicks on cards that are not hidden (revealed, resolving, matched)
    /// are ignored. References from another session or off the board are
    /// errors.
    pub fn on_card_clicked(&mut self, id: CardId) -> Result<ClickOutcome> {
        self.expect_phase(GamePhase::Playing, "card click")?;

        if !self.board.card(id)?.is_selectable() {
            debug!("{id}: ignored click");
            return Ok(ClickOutcome::Ignored);
        }

        let selection = self.tracker.select(&mut self.board, id)?;
        self.ui.flip(id);
        self.ui.set_flip_counter(self.tracker.flips());
        debug!("{id}: revealed (flip {})", self.tracker.flips());

        let (first, second) = match selection {
            Selection::First(_) => return Ok(ClickOutcome::Revealed),
            Selection::Pair { first, second } => (first, second),
        };

        let outcome = evaluate(self.board.card(first)?, self.board.card(second)?);
        self.tracker
            .resolve_pair(&mut self.board, first, second, outcome)?;

        match outcome {
            MatchOutcome::Matched => {
                self.ui.mark_matched(first);
                self.ui.mark_matched(second);
                let complete = self.board.is_complete();
                if complete {
                    debug!("{}: board complete", self.session);
                    self.queue
                        .schedule(self.session, self.config.win_delay(), GameTask::AnnounceWin);
                }
                Ok(ClickOutcome::Matched { complete })
            }
            MatchOutcome::Mismatched => {
                self.queue.schedule(
                    self.session,
                    self.config.mismatch_delay(),
                    GameTask::FlipBack(first, second),
                );
                Ok(ClickOutcome::Mismatched)
            }
        }
    }

    /// Click by board position in the current session.
    pub fn on_position_clicked(&mut self, position: usize) -> Result<ClickOutcome> {
        self.expect_phase(GamePhase::Playing, "card click")?;
        let position =
            u32::try_from(position).map_err(|_| GameError::UnknownPosition(position))?;
        self.on_card_clicked(CardId::new(self.session, position))
    }

    // === Time ===

    /// Move virtual time forward by `dt`, running every task that comes due.
    ///
    /// Time saturates at `Duration::MAX`.
    pub fn advance(&mut self, dt: Duration) {
        let until = self.queue.now().saturating_add(dt);
        while let Some(task) = self.queue.pop_due(until) {
            self.run_task(task);
        }
        self.queue.advance_to(until);
    }

    fn run_task(&mut self, scheduled: ScheduledTask<GameTask>) {
        if scheduled.session != self.session {
            debug!(
                "dropping {:?} from {} (current {})",
                scheduled.task, scheduled.session, self.session
            );
            return;
        }

        match scheduled.task {
            GameTask::Tick => {
                if self
                    .clock
                    .on_tick(&mut self.queue, scheduled.session, scheduled.id, GameTask::Tick)
                {
                    self.ui.set_timer(self.clock.elapsed_secs());
                }
            }
            GameTask::FlipBack(first, second) => {
                match self.tracker.flip_back(&mut self.board, first, second) {
                    Ok(flipped) => {
                        for id in flipped {
                            self.ui.unflip(id);
                        }
                    }
                    Err(err) => debug!("flip-back dropped: {err}"),
                }
            }
            GameTask::AnnounceWin => self.finish(),
        }
    }

    fn finish(&mut self) {
        if self.phase != GamePhase::Playing || !self.board.is_complete() {
            return;
        }

        self.clock.stop(&mut self.queue);
        let summary = GameSummary {
            session: self.session,
            flips: self.tracker.flips(),
            elapsed_secs: self.clock.elapsed_secs(),
        };
        self.summary = Some(summary);
        self.phase = GamePhase::Finished;

        info!(
            "{}: won with {} flips in {}s",
            summary.session, summary.flips, summary.elapsed_secs
        );
        self.ui.announce(&summary.message());
    }

    fn expect_phase(&self, expected: GamePhase, operation: &'static str) -> Result<()> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(GameError::WrongPhase {
                operation,
                phase: self.phase,
            })
        }
    }
}

//! Session controller: start, game over, restart and the difficulty ramp.
//!
//! A [`Session`] owns every piece of mutable game state, the single live
//! [`Ticker`] and the high score store. The frame loop feeds it commands and
//! the current time; the UI drains [`SessionEvent`]s to update its labels.

use rand::rngs::StdRng;
use tracing::{debug, info, trace, warn};

use crate::game::{CollisionType, Difficulty, Direction, GameConfig, GameEngine, GameState, StepOutcome};
use crate::input::Command;
use crate::storage::HighScoreStore;
use crate::ticker::Ticker;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Title screen, nothing moving yet
    Idle,
    Running,
    /// Game over screen, ticker stopped
    Over,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    Started,
    ScoreChanged(u32),
    HighScoreChanged(u32),
    GameOver { score: u32, cause: CollisionType },
}

pub struct Session<S: HighScoreStore> {
    engine: GameEngine,
    state: GameState,
    phase: Phase,
    difficulty: Difficulty,
    ticker: Option<Ticker>,
    high_score: u32,
    store: S,
    events: Vec<SessionEvent>,
    redraw: bool,
}

impl<S: HighScoreStore> Session<S> {
    /// Reads the high score once; any failure to read counts as zero.
    pub fn new(config: GameConfig, store: S, rng: StdRng) -> Self {
        let high_score = match store.load() {
            Ok(value) => value.unwrap_or(0),
            Err(e) => {
                warn!(error = %e, "could not read high score, starting from zero");
                0
            }
        };
        let difficulty = Difficulty::new(&config);
        let mut engine = GameEngine::new(config, rng);
        let state = engine.reset();

        Self {
            engine,
            state,
            phase: Phase::Idle,
            difficulty,
            ticker: None,
            high_score,
            store,
            events: Vec::new(),
            redraw: true,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn config(&self) -> &GameConfig {
        self.engine.config()
    }

    pub fn interval_ms(&self) -> u32 {
        self.difficulty.interval_ms()
    }

    /// The live ticker, present only while running
    pub fn ticker(&self) -> Option<&Ticker> {
        self.ticker.as_ref()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Apply a routed command. Returns false when the app should quit.
    pub fn apply(&mut self, command: Command, now: f64) -> bool {
        match command {
            Command::Steer(direction) => {
                self.request_direction(direction);
            }
            Command::Start => self.start(now),
            Command::Quit => return false,
        }
        true
    }

    /// Queue a turn for the next tick; ignored unless running
    pub fn request_direction(&mut self, direction: Direction) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        self.state.steer(direction)
    }

    /// Idle or Over -> Running. Restarting is the same as a first start.
    pub fn start(&mut self, now: f64) {
        if self.phase == Phase::Running {
            return;
        }
        // drop the old ticker before arming a new one
        self.ticker = None;
        self.state = self.engine.reset();
        self.difficulty.reset();
        self.ticker = Some(Ticker::arm(now, self.difficulty.interval()));
        self.phase = Phase::Running;
        self.redraw = true;

        info!(
            interval_ms = self.difficulty.interval_ms(),
            high_score = self.high_score,
            "session started"
        );
        self.events.push(SessionEvent::Started);
        self.events.push(SessionEvent::ScoreChanged(0));
    }

    /// Run a tick if one is due at `now`
    pub fn update(&mut self, now: f64) {
        if self.phase != Phase::Running {
            return;
        }
        let due = self.ticker.as_mut().is_some_and(|t| t.poll(now));
        if due {
            self.tick(now);
        }
    }

    /// One simulation step, regardless of the ticker
    pub fn tick(&mut self, now: f64) {
        if self.phase != Phase::Running {
            return;
        }
        match self.engine.step(&mut self.state) {
            StepOutcome::Collided(cause) => self.game_over(cause),
            StepOutcome::Ate => {
                self.events.push(SessionEvent::ScoreChanged(self.state.score));
                if self.difficulty.ramp() {
                    self.ticker = None;
                    self.ticker = Some(Ticker::arm(now, self.difficulty.interval()));
                    debug!(interval_ms = self.difficulty.interval_ms(), "speed up");
                }
                self.redraw = true;
            }
            StepOutcome::Moved => {
                trace!(tick = self.state.ticks, "tick");
                self.redraw = true;
            }
        }
    }

    fn game_over(&mut self, cause: CollisionType) {
        self.ticker = None;
        self.phase = Phase::Over;
        let score = self.state.score;

        if score > self.high_score {
            self.high_score = score;
            if let Err(e) = self.store.save(score) {
                warn!(error = %e, "could not persist high score");
            }
            self.events.push(SessionEvent::HighScoreChanged(score));
        }

        info!(score, ?cause, high_score = self.high_score, "game over");
        self.events.push(SessionEvent::GameOver { score, cause });
    }

    /// True once after every state change that needs repainting
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraw)
    }

    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;
    use crate::storage::{MemoryStore, StoreError};
    use rand::SeedableRng;

    fn session(store: MemoryStore) -> Session<MemoryStore> {
        Session::new(GameConfig::default(), store, StdRng::seed_from_u64(1))
    }

    struct BrokenStore;

    impl HighScoreStore for BrokenStore {
        fn load(&self) -> Result<Option<u32>, StoreError> {
            Err(StoreError::Io(std::io::Error::other("unavailable")))
        }

        fn save(&mut self, _high_score: u32) -> Result<(), StoreError> {
            Err(StoreError::Io(std::io::Error::other("unavailable")))
        }
    }

    #[test]
    fn test_starts_idle() {
        let mut s = session(MemoryStore::with_value(70));
        assert_eq!(s.phase(), Phase::Idle);
        assert_eq!(s.high_score(), 70);
        assert!(s.ticker().is_none());
        assert!(s.take_redraw());
        assert!(!s.take_redraw());
    }

    #[test]
    fn test_input_ignored_while_idle() {
        let mut s = session(MemoryStore::default());
        assert!(!s.request_direction(Direction::Left));
        assert_eq!(s.state().pending, Direction::Up);

        let head = s.state().snake.head();
        s.update(100.0);
        s.tick(100.0);
        assert_eq!(s.state().snake.head(), head);
    }

    #[test]
    fn test_start_arms_ticker() {
        let mut s = session(MemoryStore::default());
        s.start(1.0);

        assert_eq!(s.phase(), Phase::Running);
        assert_eq!(s.ticker().unwrap().period().as_millis(), 180);
        assert_eq!(
            s.drain_events(),
            vec![SessionEvent::Started, SessionEvent::ScoreChanged(0)]
        );
    }

    #[test]
    fn test_start_while_running_is_ignored() {
        let mut s = session(MemoryStore::default());
        s.start(0.0);
        s.state_mut().food = Cell::new(0, 0);
        s.tick(0.2);
        let head = s.state().snake.head();

        s.start(0.3);
        assert_eq!(s.state().snake.head(), head);
    }

    #[test]
    fn test_update_ticks_on_schedule() {
        let mut s = session(MemoryStore::default());
        s.start(0.0);
        s.state_mut().food = Cell::new(0, 0);
        let head = s.state().snake.head();

        s.update(0.1);
        assert_eq!(s.state().snake.head(), head);
        s.update(0.181);
        assert_eq!(s.state().snake.head(), head.step(Direction::Up));
    }

    #[test]
    fn test_eating_ramps_and_rearms() {
        let mut s = session(MemoryStore::default());
        s.start(0.0);
        s.drain_events();
        let next = s.state().snake.head().step(Direction::Up);
        s.state_mut().food = next;

        s.tick(0.5);

        assert_eq!(s.score(), 10);
        assert_eq!(s.interval_ms(), 178);
        assert_eq!(s.ticker().unwrap().period().as_millis(), 178);
        assert_eq!(s.drain_events(), vec![SessionEvent::ScoreChanged(10)]);
    }

    #[test]
    fn test_game_over_records_high_score() {
        let mut s = session(MemoryStore::with_value(5));
        s.start(0.0);
        s.state_mut().score = 30;
        s.state_mut().snake = crate::game::Snake::new(Cell::new(0, 0), Direction::Up, 3);
        s.drain_events();

        s.tick(0.2);

        assert_eq!(s.phase(), Phase::Over);
        assert!(s.ticker().is_none());
        assert_eq!(s.high_score(), 30);
        assert_eq!(s.store().value, Some(30));
        assert_eq!(
            s.drain_events(),
            vec![
                SessionEvent::HighScoreChanged(30),
                SessionEvent::GameOver {
                    score: 30,
                    cause: CollisionType::Wall
                }
            ]
        );
    }

    #[test]
    fn test_lower_score_leaves_high_score_alone() {
        let mut s = session(MemoryStore::with_value(50));
        s.start(0.0);
        s.state_mut().snake = crate::game::Snake::new(Cell::new(0, 0), Direction::Up, 3);
        s.tick(0.2);

        assert_eq!(s.high_score(), 50);
        assert_eq!(s.store().writes, 0);
    }

    #[test]
    fn test_broken_store_degrades_to_zero() {
        let mut s = Session::new(GameConfig::default(), BrokenStore, StdRng::seed_from_u64(3));
        assert_eq!(s.high_score(), 0);

        s.start(0.0);
        s.state_mut().score = 20;
        s.state_mut().snake = crate::game::Snake::new(Cell::new(0, 0), Direction::Up, 3);
        s.tick(0.2);

        // in-memory high score still moves even though the write failed
        assert_eq!(s.phase(), Phase::Over);
        assert_eq!(s.high_score(), 20);
    }

    #[test]
    fn test_quit_command() {
        let mut s = session(MemoryStore::default());
        assert!(s.apply(Command::Start, 0.0));
        assert!(s.apply(Command::Steer(Direction::Left), 0.0));
        assert_eq!(s.state().pending, Direction::Left);
        assert!(!s.apply(Command::Quit, 0.0));
    }
}

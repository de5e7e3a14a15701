use rand::Rng;
use rand::rngs::StdRng;
use tracing::{debug, trace};

use super::{
    config::GameConfig,
    grid::{Cell, Direction, Grid},
    state::{GameState, Snake},
};

/// Heading of a freshly laid out snake
pub const START_HEADING: Direction = Direction::Up;

/// Type of collision that ended a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Head left the grid
    Wall,
    /// Head ran into the body
    SelfCollision,
}

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Moved,
    /// Head landed on food; the snake grew and food was relocated
    Ate,
    /// Nothing but the committed velocity changed
    Collided(CollisionType),
}

/// Movement, growth, collision and food placement
pub struct GameEngine {
    config: GameConfig,
    grid: Grid,
    rng: StdRng,
}

impl GameEngine {
    pub fn new(config: GameConfig, rng: StdRng) -> Self {
        let grid = Grid::new(config.grid_size);
        Self { config, grid, rng }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Fresh state: initial snake at the midpoint heading up, food placed
    pub fn reset(&mut self) -> GameState {
        let snake = Snake::new(self.grid.midpoint(), START_HEADING, self.config.initial_length);
        let food = self.place_food(&snake).unwrap_or(snake.head());
        GameState::new(self.grid, snake, food, START_HEADING)
    }

    /// Advance the state by one tick
    pub fn step(&mut self, state: &mut GameState) -> StepOutcome {
        state.velocity = state.pending;
        let head = state.snake.head().step(state.velocity);

        if let Some(collision) = Self::check_collision(state, head) {
            trace!(?collision, x = head.x, y = head.y, "collision");
            return StepOutcome::Collided(collision);
        }

        state.snake.push_head(head);
        state.ticks += 1;

        if head == state.food {
            state.score += self.config.score_increment;
            // a full board leaves nowhere to go; the next tick collides
            if let Some(food) = self.place_food(&state.snake) {
                state.food = food;
            }
            debug!(score = state.score, len = state.snake.len(), "food eaten");
            StepOutcome::Ate
        } else {
            state.snake.pop_tail();
            StepOutcome::Moved
        }
    }

    fn check_collision(state: &GameState, head: Cell) -> Option<CollisionType> {
        if !state.grid.contains(head) {
            return Some(CollisionType::Wall);
        }
        if state.snake.contains(head) {
            return Some(CollisionType::SelfCollision);
        }
        None
    }

    /// Uniformly random free cell, re-drawn until it misses the snake.
    /// `None` only when the snake covers the whole grid.
    pub fn place_food(&mut self, snake: &Snake) -> Option<Cell> {
        if snake.len() >= self.grid.cell_count() {
            return None;
        }
        let size = self.grid.size() as i32;
        loop {
            let cell = Cell::new(self.rng.gen_range(0..size), self.rng.gen_range(0..size));
            if !snake.contains(cell) {
                return Some(cell);
            }
        }
    }
}

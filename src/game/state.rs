use std::collections::VecDeque;

use super::grid::{Cell, Direction, Grid};

/// The snake, head at the front
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    body: VecDeque<Cell>,
}

impl Snake {
    /// Lay out `length` cells trailing behind `head`, opposite to `heading`
    pub fn new(head: Cell, heading: Direction, length: usize) -> Self {
        let mut body = VecDeque::with_capacity(length.max(1));
        body.push_back(head);
        let back = heading.opposite();
        for _ in 1..length {
            let last = body[body.len() - 1];
            body.push_back(last.step(back));
        }
        Self { body }
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Never true for a snake built through [`Snake::new`]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    pub fn cells(&self) -> impl ExactSizeIterator<Item = Cell> + '_ {
        self.body.iter().copied()
    }

    pub(crate) fn push_head(&mut self, cell: Cell) {
        self.body.push_front(cell);
    }

    pub(crate) fn pop_tail(&mut self) -> Option<Cell> {
        // length never drops below one
        if self.body.len() > 1 {
            self.body.pop_back()
        } else {
            None
        }
    }
}

/// Entity state of one session
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub grid: Grid,
    pub snake: Snake,
    pub food: Cell,
    /// Direction applied during the most recent tick
    pub velocity: Direction,
    /// Requested direction awaiting the next tick
    pub pending: Direction,
    pub score: u32,
    pub ticks: u64,
}

impl GameState {
    pub fn new(grid: Grid, snake: Snake, food: Cell, heading: Direction) -> Self {
        Self {
            grid,
            snake,
            food,
            velocity: heading,
            pending: heading,
            score: 0,
            ticks: 0,
        }
    }

    /// Queue a direction for the next tick. A request that reverses the
    /// committed velocity is dropped; returns whether it was accepted.
    pub fn steer(&mut self, direction: Direction) -> bool {
        if self.velocity.is_opposite(direction) {
            return false;
        }
        self.pending = direction;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snake_creation() {
        let snake = Snake::new(Cell::new(12, 12), Direction::Up, 3);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Cell::new(12, 12));
        assert_eq!(snake.tail(), Cell::new(12, 14));
        assert_eq!(
            snake.cells().collect::<Vec<_>>(),
            vec![Cell::new(12, 12), Cell::new(12, 13), Cell::new(12, 14)]
        );
    }

    #[test]
    fn test_single_cell_snake_keeps_its_cell() {
        let mut snake = Snake::new(Cell::new(1, 1), Direction::Right, 1);
        assert_eq!(snake.pop_tail(), None);
        assert_eq!(snake.len(), 1);
    }

    #[test]
    fn test_steer_rejects_reversal() {
        let grid = Grid::new(10);
        let snake = Snake::new(Cell::new(5, 5), Direction::Up, 3);
        let mut state = GameState::new(grid, snake, Cell::new(0, 0), Direction::Up);

        assert!(!state.steer(Direction::Down));
        assert_eq!(state.pending, Direction::Up);

        assert!(state.steer(Direction::Left));
        assert_eq!(state.pending, Direction::Left);

        // still checked against the committed velocity, not the pending one
        assert!(state.steer(Direction::Right));
        assert_eq!(state.pending, Direction::Right);
        assert!(!state.steer(Direction::Down));
        assert_eq!(state.pending, Direction::Right);
    }
}

use crate::games::SessionRng;
use crate::{debug_log, log};
use super::snake::Snake;
use super::snapshot::SnakeSnapshot;
use super::types::{DeathReason, Direction, GameStatus, Point};

const START_DIRECTION: Direction = Direction::Right;

/// Single-player snake simulation on a square grid.
///
/// Movement clamps at the walls instead of wrapping. The snake only changes through
/// [`tick`](Self::tick) and [`reset`](Self::reset); input goes through
/// [`set_direction`](Self::set_direction) and takes effect on the next tick.
pub struct SnakeGameState {
    snake: Snake,
    food: Option<Point>,
    grid_size: usize,
    score: u32,
    status: GameStatus,
    rng: SessionRng,
}

impl SnakeGameState {
    /// A grid size of 0 is treated as 1.
    pub fn new(grid_size: usize, rng: SessionRng) -> Self {
        let grid_size = grid_size.max(1);
        let mut state = Self {
            snake: Snake::new(Self::center(grid_size), START_DIRECTION),
            food: None,
            grid_size,
            score: 0,
            status: GameStatus::Running,
            rng,
        };
        state.place_food();
        state
    }

    fn center(grid_size: usize) -> Point {
        Point::new(grid_size / 2, grid_size / 2)
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn head(&self) -> Point {
        self.snake.head()
    }

    pub fn food(&self) -> Option<Point> {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn direction(&self) -> Direction {
        self.snake.direction
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.snake.pending_direction
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        !self.status.is_running()
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Queues `direction` for the next tick. Returns `false` when the turn is ignored:
    /// the game is over, or `direction` would reverse the snake onto itself.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if self.is_game_over() || direction.is_opposite(&self.snake.direction) {
            return false;
        }
        self.snake.pending_direction = Some(direction);
        true
    }

    pub fn tick(&mut self) {
        if self.is_game_over() {
            return;
        }

        if let Some(direction) = self.snake.pending_direction.take() {
            self.snake.direction = direction;
        }

        let next_head = self.snake.head().step_clamped(self.snake.direction, self.grid_size);

        if self.food == Some(next_head) {
            self.snake.grow(next_head);
            self.score += 1;
            log!(
                "ate food at ({}, {}). Score: {}",
                next_head.x,
                next_head.y,
                self.score
            );
            self.place_food();
        } else {
            self.snake.advance(next_head);
        }

        if !self.status.is_running() {
            return;
        }

        if let Some(reason) = self.detect_collision() {
            self.status = GameStatus::Lost(reason);
            log!(
                "snake died at ({}, {}): {:?}. Final score: {}",
                next_head.x,
                next_head.y,
                reason,
                self.score
            );
        }
    }

    /// Restarts on the same grid. The random source carries on from where it was.
    pub fn reset(&mut self) {
        self.snake = Snake::new(Self::center(self.grid_size), START_DIRECTION);
        self.food = None;
        self.score = 0;
        self.status = GameStatus::Running;
        self.place_food();
    }

    pub fn snapshot(&self) -> SnakeSnapshot {
        SnakeSnapshot {
            grid_size: self.grid_size,
            cells: self.snake.cells().copied().collect(),
            food: self.food,
            score: self.score,
            status: self.status,
        }
    }

    fn detect_collision(&self) -> Option<DeathReason> {
        if !self.snake.head().is_within(self.grid_size) {
            return Some(DeathReason::WallCollision);
        }
        if self.snake.head_overlaps_body() {
            return Some(DeathReason::SelfCollision);
        }
        None
    }

    fn place_food(&mut self) {
        if self.snake.occupied_cells() >= self.grid_size * self.grid_size {
            self.food = None;
            self.status = GameStatus::Won;
            log!("snake fills the {0}x{0} grid. Final score: {1}", self.grid_size, self.score);
            return;
        }

        loop {
            let candidate = Point::new(
                self.rng.random_range(0..self.grid_size),
                self.rng.random_range(0..self.grid_size),
            );
            if !self.snake.contains(&candidate) {
                debug_log!("food placed at ({}, {})", candidate.x, candidate.y);
                self.food = Some(candidate);
                return;
            }
        }
    }

    #[cfg(test)]
    fn set_food(&mut self, food: Point) {
        self.food = Some(food);
    }

    #[cfg(test)]
    fn set_snake(&mut self, cells: &[Point], direction: Direction) {
        self.snake = Snake::from_cells(cells, direction);
    }
}

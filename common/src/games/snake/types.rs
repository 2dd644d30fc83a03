#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Moves one cell towards `direction`, holding position on an axis that would leave
    /// the `grid_size` square. `y` grows downwards.
    pub fn step_clamped(self, direction: Direction, grid_size: usize) -> Point {
        let max = grid_size.saturating_sub(1);
        match direction {
            Direction::Up => Point::new(self.x, self.y.saturating_sub(1)),
            Direction::Down => Point::new(self.x, (self.y + 1).min(max)),
            Direction::Left => Point::new(self.x.saturating_sub(1), self.y),
            Direction::Right => Point::new((self.x + 1).min(max), self.y),
        }
    }

    pub fn is_within(&self, grid_size: usize) -> bool {
        self.x < grid_size && self.y < grid_size
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }

    pub fn is_opposite(&self, other: &Direction) -> bool {
        self.opposite() == *other
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    Lost(DeathReason),
    /// The snake covers every cell, so there is nowhere left to put food.
    Won,
}

impl GameStatus {
    pub fn is_running(&self) -> bool {
        matches!(self, GameStatus::Running)
    }
}

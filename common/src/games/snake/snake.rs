use std::collections::{HashSet, VecDeque};

use super::types::{Direction, Point};

#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Point>,
    body_set: HashSet<Point>,
    pub direction: Direction,
    pub pending_direction: Option<Direction>,
}

impl Snake {
    pub fn new(start_pos: Point, direction: Direction) -> Self {
        Self {
            body: VecDeque::from([start_pos]),
            body_set: HashSet::from([start_pos]),
            direction,
            pending_direction: None,
        }
    }

    #[cfg(test)]
    pub(crate) fn from_cells(cells: &[Point], direction: Direction) -> Self {
        Self {
            body: cells.iter().copied().collect(),
            body_set: cells.iter().copied().collect(),
            direction,
            pending_direction: None,
        }
    }

    pub fn head(&self) -> Point {
        *self.body.front().expect("Snake body should never be empty")
    }

    #[cfg(test)]
    fn tail(&self) -> Point {
        *self.body.back().expect("Snake body should never be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn occupied_cells(&self) -> usize {
        self.body_set.len()
    }

    pub fn contains(&self, point: &Point) -> bool {
        self.body_set.contains(point)
    }

    pub fn cells(&self) -> impl Iterator<Item = &Point> {
        self.body.iter()
    }

    /// True when the head shares its cell with another segment.
    pub fn head_overlaps_body(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|segment| *segment == head)
    }

    pub fn grow(&mut self, new_head: Point) {
        self.body.push_front(new_head);
        self.body_set.insert(new_head);
    }

    pub fn advance(&mut self, new_head: Point) {
        self.grow(new_head);
        let tail = self
            .body
            .pop_back()
            .expect("Snake body should never be empty");
        // The head may have landed on the cell it is leaving; that cell stays occupied.
        if tail != new_head {
            self.body_set.remove(&tail);
        }
    }
}

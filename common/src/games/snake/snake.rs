use std::collections::{HashSet, VecDeque};

use super::types::{Direction, Point};

/// Body is stored tail first: `body.front()` is the tail, `body.back()` the head.
#[derive(Clone, Debug)]
pub struct Snake {
    pub body: VecDeque<Point>,
    pub body_set: HashSet<Point>,
    pub direction: Direction,
    pub pending_direction: Option<Direction>,
    pub score: u32,
}

impl Snake {
    pub fn new(segments: impl IntoIterator<Item = Point>, direction: Direction) -> Self {
        let body: VecDeque<Point> = segments.into_iter().collect();
        assert!(!body.is_empty(), "Snake body should never be empty");
        let body_set = body.iter().copied().collect();

        Self {
            body,
            body_set,
            direction,
            pending_direction: None,
            score: 0,
        }
    }

    pub fn head(&self) -> Point {
        *self.body.back().expect("Snake body should never be empty")
    }

    pub fn tail(&self) -> Point {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn occupies(&self, point: &Point) -> bool {
        self.body_set.contains(point)
    }

    pub fn push_head(&mut self, point: Point) {
        self.body.push_back(point);
        self.body_set.insert(point);
    }

    pub fn pop_tail(&mut self) -> Option<Point> {
        let tail = self.body.pop_front()?;
        self.body_set.remove(&tail);
        Some(tail)
    }

    /// Takes the pending turn if it doesn't reverse the last applied direction.
    pub fn latch_direction(&mut self) -> Direction {
        if let Some(pending) = self.pending_direction.take()
            && !pending.is_opposite(&self.direction)
        {
            self.direction = pending;
        }
        self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn starting_snake() -> Snake {
        Snake::new(
            [Point::new(1, 1), Point::new(2, 1), Point::new(3, 1)],
            Direction::Right,
        )
    }

    #[test]
    fn test_head_is_last_and_tail_is_first() {
        let snake = starting_snake();
        assert_eq!(snake.head(), Point::new(3, 1));
        assert_eq!(snake.tail(), Point::new(1, 1));
        assert_eq!(snake.len(), 3);
    }

    #[test]
    fn test_push_and_pop_keep_set_in_sync() {
        let mut snake = starting_snake();
        snake.push_head(Point::new(4, 1));
        assert!(snake.occupies(&Point::new(4, 1)));

        assert_eq!(snake.pop_tail(), Some(Point::new(1, 1)));
        assert!(!snake.occupies(&Point::new(1, 1)));
        assert_eq!(snake.body.len(), snake.body_set.len());
    }

    #[test]
    fn test_latch_ignores_reversal() {
        let mut snake = starting_snake();
        snake.pending_direction = Some(Direction::Left);
        assert_eq!(snake.latch_direction(), Direction::Right);
        assert_eq!(snake.pending_direction, None);
    }

    #[test]
    fn test_latch_applies_turn() {
        let mut snake = starting_snake();
        snake.pending_direction = Some(Direction::Down);
        assert_eq!(snake.latch_direction(), Direction::Down);
        assert_eq!(snake.direction, Direction::Down);
    }
}

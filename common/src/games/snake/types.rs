use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn step(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    pub fn is_opposite(&self, other: &Direction) -> bool {
        self.opposite() == *other
    }

    /// Unit vector in grid space, y grows downwards.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WallCollisionMode {
    Death,
    WrapAround,
}

impl WallCollisionMode {
    pub fn from_warp(warp_walls: bool) -> Self {
        if warp_walls {
            WallCollisionMode::WrapAround
        } else {
            WallCollisionMode::Death
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSize {
    pub width: usize,
    pub height: usize,
}

impl FieldSize {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as usize) < self.width
            && (point.y as usize) < self.height
    }

    pub fn wrap(&self, point: Point) -> Point {
        Point::new(
            point.x.rem_euclid(self.width as i32),
            point.y.rem_euclid(self.height as i32),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_table_is_symmetric() {
        for direction in Direction::ALL {
            assert_eq!(direction.opposite().opposite(), direction);
            assert!(direction.is_opposite(&direction.opposite()));
            assert!(!direction.is_opposite(&direction));
        }
    }

    #[test]
    fn test_step_moves_one_cell() {
        let p = Point::new(5, 5);
        assert_eq!(p.step(Direction::Up), Point::new(5, 4));
        assert_eq!(p.step(Direction::Down), Point::new(5, 6));
        assert_eq!(p.step(Direction::Left), Point::new(4, 5));
        assert_eq!(p.step(Direction::Right), Point::new(6, 5));
    }

    #[test]
    fn test_wrap_handles_both_edges() {
        let field = FieldSize::new(20, 10);
        assert_eq!(field.wrap(Point::new(20, 3)), Point::new(0, 3));
        assert_eq!(field.wrap(Point::new(-1, 3)), Point::new(19, 3));
        assert_eq!(field.wrap(Point::new(4, -1)), Point::new(4, 9));
        assert_eq!(field.wrap(Point::new(4, 10)), Point::new(4, 0));
    }

    #[test]
    fn test_contains() {
        let field = FieldSize::new(20, 20);
        assert!(field.contains(Point::new(0, 0)));
        assert!(field.contains(Point::new(19, 19)));
        assert!(!field.contains(Point::new(20, 0)));
        assert!(!field.contains(Point::new(0, -1)));
    }
}

use serde::{Deserialize, Serialize};

/// One tile of the board. Signed so a head that left the board is still a value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Cell { x: self.x + dx, y: self.y + dy }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// Unit vector in tile space; y grows downwards.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub width: i32,
    pub height: i32,
}

impl Board {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn in_bounds(&self, c: Cell) -> bool {
        c.x >= 0 && c.y >= 0 && c.x < self.width && c.y < self.height
    }

    pub fn area(&self) -> usize {
        (self.width.max(0) as usize) * (self.height.max(0) as usize)
    }

    /// Every cell, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Cell { x, y }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_half_open() {
        let board = Board::new(10, 8);
        assert!(board.in_bounds(Cell::new(0, 0)));
        assert!(board.in_bounds(Cell::new(9, 7)));
        assert!(!board.in_bounds(Cell::new(10, 0)));
        assert!(!board.in_bounds(Cell::new(0, 8)));
        assert!(!board.in_bounds(Cell::new(-1, 3)));
        assert!(!board.in_bounds(Cell::new(3, -1)));
    }

    #[test]
    fn step_follows_delta_table() {
        let origin = Cell::new(5, 5);
        assert_eq!(origin.step(Direction::Up), Cell::new(5, 4));
        assert_eq!(origin.step(Direction::Down), Cell::new(5, 6));
        assert_eq!(origin.step(Direction::Left), Cell::new(4, 5));
        assert_eq!(origin.step(Direction::Right), Cell::new(6, 5));
    }

    #[test]
    fn cells_cover_the_board_once() {
        let board = Board::new(4, 3);
        let all: Vec<Cell> = board.cells().collect();
        assert_eq!(all.len(), board.area());
        assert_eq!(all.first(), Some(&Cell::new(0, 0)));
        assert_eq!(all.last(), Some(&Cell::new(3, 2)));
        assert!(all.iter().all(|c| board.in_bounds(*c)));
    }
}

use std::collections::VecDeque;

use crate::board::{Cell, Direction};

/// What one `advance` changed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Advance {
    pub head: Cell,
    /// Tail cell given up this step; `None` while growing.
    pub vacated: Option<Cell>,
}

#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Cell>,
    direction: Direction,
    growing: bool,
}

impl Snake {
    /// Lays the body out from `start` towards +x, head first. No bounds check.
    pub fn new(start: Cell, length: usize, direction: Direction) -> Self {
        let body = (0..length.max(1) as i32)
            .map(|i| Cell { x: start.x + i, y: start.y })
            .collect();
        Snake { body, direction, growing: false }
    }

    pub fn from_cells(cells: impl IntoIterator<Item = Cell>, direction: Direction) -> Option<Self> {
        let body: VecDeque<Cell> = cells.into_iter().collect();
        if body.is_empty() {
            return None;
        }
        Some(Snake { body, direction, growing: false })
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    pub fn body(&self) -> impl Iterator<Item = Cell> + '_ {
        self.body.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_growing(&self) -> bool {
        self.growing
    }

    /// Takes effect on the next `advance`. Reversing is allowed.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    pub fn mark_growing(&mut self) {
        self.growing = true;
    }

    pub fn occupies(&self, c: Cell) -> bool {
        self.body.contains(&c)
    }

    /// True when the head shares a cell with any other segment.
    pub fn hits_itself(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|c| *c == head)
    }

    pub fn advance(&mut self) -> Advance {
        let head = self.head().step(self.direction);
        self.body.push_front(head);

        let vacated = if self.growing {
            self.growing = false;
            None
        } else {
            self.body.pop_back()
        };

        Advance { head, vacated }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(snake: &Snake) -> Vec<(i32, i32)> {
        snake.body().map(|c| (c.x, c.y)).collect()
    }

    #[test]
    fn new_trails_behind_a_left_facing_head() {
        let snake = Snake::new(Cell::new(25, 25), 5, Direction::Left);
        assert_eq!(cells(&snake), vec![(25, 25), (26, 25), (27, 25), (28, 25), (29, 25)]);
        assert_eq!(snake.direction(), Direction::Left);
        assert!(!snake.is_growing());
    }

    #[test]
    fn zero_length_still_has_a_head() {
        let snake = Snake::new(Cell::new(1, 1), 0, Direction::Left);
        assert_eq!(snake.len(), 1);
    }

    #[test]
    fn advance_drops_the_tail() {
        let mut snake = Snake::new(Cell::new(5, 5), 3, Direction::Left);
        let step = snake.advance();
        assert_eq!(step, Advance { head: Cell::new(4, 5), vacated: Some(Cell::new(7, 5)) });
        assert_eq!(cells(&snake), vec![(4, 5), (5, 5), (6, 5)]);
    }

    #[test]
    fn growing_keeps_the_tail_once() {
        let mut snake = Snake::new(Cell::new(5, 5), 3, Direction::Left);
        snake.mark_growing();

        let step = snake.advance();
        assert_eq!(step.vacated, None);
        assert_eq!(snake.len(), 4);
        assert!(!snake.is_growing());

        let step = snake.advance();
        assert_eq!(step.vacated, Some(Cell::new(7, 5)));
        assert_eq!(snake.len(), 4);
    }

    #[test]
    fn direction_change_applies_on_next_advance() {
        let mut snake = Snake::new(Cell::new(5, 5), 3, Direction::Left);
        snake.set_direction(Direction::Up);
        assert_eq!(snake.head(), Cell::new(5, 5));
        assert_eq!(snake.advance().head, Cell::new(5, 4));
    }

    #[test]
    fn reversal_runs_into_the_neck() {
        let mut snake = Snake::new(Cell::new(5, 5), 3, Direction::Left);
        snake.set_direction(Direction::Right);
        snake.advance();
        assert_eq!(snake.head(), Cell::new(6, 5));
        assert!(snake.hits_itself());
    }

    #[test]
    fn occupies_checks_every_segment() {
        let snake = Snake::new(Cell::new(5, 5), 3, Direction::Left);
        assert!(snake.occupies(Cell::new(5, 5)));
        assert!(snake.occupies(Cell::new(7, 5)));
        assert!(!snake.occupies(Cell::new(8, 5)));
        assert_eq!(snake.tail(), Cell::new(7, 5));
    }

    #[test]
    fn from_cells_rejects_empty_body() {
        assert!(Snake::from_cells(Vec::new(), Direction::Up).is_none());
    }
}

use rand::Rng;

use crate::board::{Board, Cell};
use crate::consts::MAX_PLACEMENT_ATTEMPTS;
use crate::error::GameError;
use crate::snake::Snake;

/// Picks a random in-bounds cell the snake does not occupy.
///
/// Rejection sampling first; once `MAX_PLACEMENT_ATTEMPTS` draws have all
/// landed on the snake, picks uniformly among the free cells instead.
pub fn place<R: Rng + ?Sized>(snake: &Snake, board: &Board, rng: &mut R) -> Result<Cell, GameError> {
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let cell = Cell {
            x: rng.gen_range(0..board.width),
            y: rng.gen_range(0..board.height),
        };
        if !snake.occupies(cell) {
            return Ok(cell);
        }
    }

    let free: Vec<Cell> = board.cells().filter(|c| !snake.occupies(*c)).collect();
    if free.is_empty() {
        return Err(GameError::BoardFull { width: board.width, height: board.height });
    }
    Ok(free[rng.gen_range(0..free.len())])
}

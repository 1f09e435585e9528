use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::board::{Board, Cell, Direction};
use crate::consts::{BOARD_HEIGHT, BOARD_WIDTH, START_LENGTH, START_X, START_Y};

/// How the head treats the cell the tail leaves on the same tick.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TailCollision {
    /// The vacated tail cell still counts as body.
    #[default]
    Strict,
    /// The vacated tail cell is free; chasing your own tail is safe.
    Lenient,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub board: Board,
    pub start: Cell,
    pub start_length: usize,
    pub start_direction: Direction,
    pub tail_collision: TailCollision,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board: Board::new(BOARD_WIDTH, BOARD_HEIGHT),
            start: Cell::new(START_X, START_Y),
            start_length: START_LENGTH,
            start_direction: Direction::Left,
            tail_collision: TailCollision::default(),
        }
    }
}

/// Everything a tick needs besides the game state itself.
pub struct GameContext<R = StdRng> {
    pub config: GameConfig,
    pub rng: R,
}

impl<R: Rng> GameContext<R> {
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        Self { config, rng }
    }
}

impl GameContext<StdRng> {
    pub fn new(config: GameConfig) -> Self {
        Self { config, rng: StdRng::from_entropy() }
    }

    pub fn seeded(config: GameConfig, seed: u64) -> Self {
        Self { config, rng: StdRng::seed_from_u64(seed) }
    }
}

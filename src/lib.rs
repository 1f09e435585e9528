pub mod board;
pub mod config;
pub mod consts;
pub mod error;
pub mod food;
pub mod frontend;
pub mod game;
pub mod render;
pub mod snake;

pub use board::{Board, Cell, Direction};
pub use config::{GameConfig, GameContext, TailCollision};
pub use error::GameError;
pub use game::{GameOverCause, GameState, GameSummary, Phase, TickReport};
pub use snake::{Advance, Snake};

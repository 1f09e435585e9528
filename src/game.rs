use log::{debug, info, warn};
use rand::Rng;
use serde::Serialize;

use crate::board::{Cell, Direction};
use crate::config::{GameContext, TailCollision};
use crate::error::GameError;
use crate::food;
use crate::snake::Snake;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum GameOverCause {
    Wall,
    SelfCollision,
    BoardFull,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum Phase {
    Running,
    /// Absorbing: nothing leaves it except quitting the process.
    GameOver(GameOverCause),
}

/// What one tick changed. The binary logs it at trace level; frames are
/// always redrawn in full from `GameState`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TickReport {
    pub head: Option<Cell>,
    pub vacated: Option<Cell>,
    /// New food cell, if the food was eaten and moved.
    pub food: Option<Cell>,
    pub score: u32,
    pub phase: Phase,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GameSummary {
    pub score: u32,
    pub length: usize,
    pub phase: Phase,
    pub head: Cell,
    pub food: Cell,
}

pub struct GameState {
    snake: Snake,
    food: Cell,
    score: u32,
    phase: Phase,
}

impl GameState {
    pub fn new<R: Rng>(ctx: &mut GameContext<R>) -> Result<Self, GameError> {
        let config = &ctx.config;
        let snake = Snake::new(config.start, config.start_length, config.start_direction);
        let food = food::place(&snake, &config.board, &mut ctx.rng)?;
        Ok(Self::with_layout(snake, food))
    }

    /// Starts a game from a known snake and food cell.
    pub fn with_layout(snake: Snake, food: Cell) -> Self {
        Self { snake, food, score: 0, phase: Phase::Running }
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Cell {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Queues a direction for the next tick. Ignored once the game is over.
    pub fn steer(&mut self, direction: Direction) {
        if self.is_running() {
            self.snake.set_direction(direction);
        }
    }

    pub fn tick<R: Rng>(&mut self, ctx: &mut GameContext<R>) -> TickReport {
        if !self.is_running() {
            return self.report(None, None, None);
        }

        let step = self.snake.advance();
        let board = &ctx.config.board;

        if !board.in_bounds(step.head) {
            return self.end(GameOverCause::Wall, step.head, step.vacated);
        }

        let onto_tail = ctx.config.tail_collision == TailCollision::Strict && step.vacated == Some(step.head);
        if self.snake.hits_itself() || onto_tail {
            return self.end(GameOverCause::SelfCollision, step.head, step.vacated);
        }

        if step.head != self.food {
            return self.report(Some(step.head), step.vacated, None);
        }

        self.score += 1;
        self.snake.mark_growing();
        debug!("ate food at ({}, {}), score {}", step.head.x, step.head.y, self.score);

        match food::place(&self.snake, board, &mut ctx.rng) {
            Ok(cell) => {
                self.food = cell;
                self.report(Some(step.head), step.vacated, Some(cell))
            }
            Err(err) => {
                warn!("{err}");
                self.end(GameOverCause::BoardFull, step.head, step.vacated)
            }
        }
    }

    pub fn summary(&self) -> GameSummary {
        GameSummary {
            score: self.score,
            length: self.snake.len(),
            phase: self.phase,
            head: self.snake.head(),
            food: self.food,
        }
    }

    fn end(&mut self, cause: GameOverCause, head: Cell, vacated: Option<Cell>) -> TickReport {
        info!("game over ({cause:?}) with score {}", self.score);
        self.phase = Phase::GameOver(cause);
        self.report(Some(head), vacated, None)
    }

    fn report(&self, head: Option<Cell>, vacated: Option<Cell>, food: Option<Cell>) -> TickReport {
        TickReport { head, vacated, food, score: self.score, phase: self.phase }
    }
}

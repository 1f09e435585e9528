//! The boundary between the game core and whatever draws it.
//!
//! The core only speaks in tiles; pixel layout, fonts and key codes belong to
//! the implementor.

use crate::board::{Cell, Direction};
use crate::config::GameContext;
use crate::game::GameState;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TileKind {
    Snake,
    Food,
}

/// Input gathered since the last poll.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct InputEvents {
    pub quit_requested: bool,
    /// Last direction key pressed, if any.
    pub direction: Option<Direction>,
}

pub trait Frontend {
    fn poll_events(&mut self) -> InputEvents;
    fn clear(&mut self);
    fn draw_tile(&mut self, cell: Cell, kind: TileKind);
    fn draw_score_bar(&mut self, score: u32);
    fn draw_game_over(&mut self, score: u32);
    fn now_millis(&self) -> u64;
    fn wait_until(&mut self, deadline_millis: u64);
}

/// Emits every draw call for one frame of `state`.
pub fn draw_state<F: Frontend + ?Sized, R>(frontend: &mut F, ctx: &GameContext<R>, state: &GameState) {
    let board = &ctx.config.board;

    if !state.is_running() {
        frontend.draw_game_over(state.score());
        return;
    }

    frontend.clear();
    for cell in state.snake().body().filter(|c| board.in_bounds(*c)) {
        frontend.draw_tile(cell, TileKind::Snake);
    }
    frontend.draw_tile(state.food(), TileKind::Food);
    frontend.draw_score_bar(state.score());
}

/// Milliseconds left in the frame budget; zero once the frame ran over.
pub fn frame_delay(start_millis: u64, now_millis: u64, frame_millis: u64) -> u64 {
    frame_millis.saturating_sub(now_millis.saturating_sub(start_millis))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_delay_never_goes_negative() {
        assert_eq!(frame_delay(1000, 1000, 62), 62);
        assert_eq!(frame_delay(1000, 1040, 62), 22);
        assert_eq!(frame_delay(1000, 1062, 62), 0);
        assert_eq!(frame_delay(1000, 1500, 62), 0);
    }
}

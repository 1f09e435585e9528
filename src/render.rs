use std::thread::sleep;
use std::time::Duration;

use macroquad::input::utils::{register_input_subscriber, repeat_all_miniquad_input};
use macroquad::miniquad::{EventHandler, KeyMods};
use macroquad::prelude::*;

use crate::board::{Cell, Direction};
use crate::consts::{FONT_SIZE, SCORE_BAR_HEIGHT, SCREEN_WIDTH, SEGMENT_RADIUS, TILE_SIZE};
use crate::frontend::{Frontend, InputEvents, TileKind};

const SNAKE_COLOR: Color = Color::new(0.0, 200.0 / 255.0, 0.0, 1.0);
const FOOD_COLOR: Color = Color::new(200.0 / 255.0, 0.0, 0.0, 1.0);
const BG_COLOR: Color = BLACK;
const FONT_COLOR: Color = WHITE;
const SCORE_BAR_COLOR: Color = Color::new(64.0 / 255.0, 64.0 / 255.0, 64.0 / 255.0, 1.0);

const GAME_OVER_POS: (f32, f32) = (250.0, 250.0);

/// Window, keyboard and clock backed by macroquad.
pub struct MacroquadFrontend {
    input_subscriber: usize,
}

impl MacroquadFrontend {
    /// Takes over the window close button so a close shows up in `poll_events`.
    pub fn new() -> Self {
        prevent_quit();
        MacroquadFrontend { input_subscriber: register_input_subscriber() }
    }
}

/// Key presses in arrival order, replayed from the raw miniquad events.
#[derive(Default)]
struct KeyPresses(Vec<KeyCode>);

impl EventHandler for KeyPresses {
    fn update(&mut self) {}

    fn draw(&mut self) {}

    fn key_down_event(&mut self, keycode: KeyCode, _keymods: KeyMods, repeat: bool) {
        if !repeat {
            self.0.push(keycode);
        }
    }
}

impl Default for MacroquadFrontend {
    fn default() -> Self {
        Self::new()
    }
}

/// Top-left pixel of a tile, below the score bar.
pub fn tile_origin(cell: Cell) -> (f32, f32) {
    (
        (cell.x * TILE_SIZE) as f32,
        (cell.y * TILE_SIZE + SCORE_BAR_HEIGHT) as f32,
    )
}

pub fn direction_for_key(key: KeyCode) -> Option<Direction> {
    match key {
        KeyCode::Up | KeyCode::W => Some(Direction::Up),
        KeyCode::Down | KeyCode::S => Some(Direction::Down),
        KeyCode::Left | KeyCode::A => Some(Direction::Left),
        KeyCode::Right | KeyCode::D => Some(Direction::Right),
        _ => None,
    }
}

/// The last direction key in `keys`; other keys leave it untouched.
pub fn last_direction(keys: impl IntoIterator<Item = KeyCode>) -> Option<Direction> {
    keys.into_iter().filter_map(direction_for_key).last()
}

impl Frontend for MacroquadFrontend {
    fn poll_events(&mut self) -> InputEvents {
        InputEvents {
            quit_requested: is_quit_requested() || is_key_pressed(KeyCode::Q),
            direction: {
                let mut presses = KeyPresses::default();
                repeat_all_miniquad_input(&mut presses, self.input_subscriber);
                last_direction(presses.0)
            },
        }
    }

    fn clear(&mut self) {
        clear_background(BG_COLOR);
    }

    fn draw_tile(&mut self, cell: Cell, kind: TileKind) {
        let color = match kind {
            TileKind::Snake => SNAKE_COLOR,
            TileKind::Food => FOOD_COLOR,
        };
        let (x, y) = tile_origin(cell);
        let half = TILE_SIZE as f32 / 2.0;
        draw_circle(x + half, y + half, SEGMENT_RADIUS, color);
    }

    fn draw_score_bar(&mut self, score: u32) {
        draw_rectangle(0.0, 0.0, SCREEN_WIDTH as f32, SCORE_BAR_HEIGHT as f32, SCORE_BAR_COLOR);
        let label = format!("SCORE: {}", score);
        let size = measure_text(&label, None, FONT_SIZE, 1.0);
        // text y is the baseline; centre the glyphs vertically in the bar
        let baseline = (SCORE_BAR_HEIGHT as f32 + size.height) * 0.5;
        draw_text(&label, 0.0, baseline, FONT_SIZE as f32, FONT_COLOR);
    }

    fn draw_game_over(&mut self, score: u32) {
        clear_background(BG_COLOR);
        let (x, y) = GAME_OVER_POS;
        draw_text("GAME OVER!", x, y + FONT_SIZE as f32, FONT_SIZE as f32, FONT_COLOR);
        let label = format!("SCORE: {}", score);
        draw_text(&label, x, y + 2.0 * FONT_SIZE as f32, FONT_SIZE as f32 * 0.5, FONT_COLOR);
    }

    fn now_millis(&self) -> u64 {
        (get_time() * 1000.0) as u64
    }

    fn wait_until(&mut self, deadline_millis: u64) {
        let now = self.now_millis();
        if deadline_millis > now {
            sleep(Duration::from_millis(deadline_millis - now));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiles_sit_below_the_score_bar() {
        assert_eq!(tile_origin(Cell::new(0, 0)), (0.0, 48.0));
        assert_eq!(tile_origin(Cell::new(49, 49)), (784.0, 832.0));
    }

    #[test]
    fn last_direction_key_in_a_frame_wins() {
        assert_eq!(last_direction([KeyCode::Down, KeyCode::Left]), Some(Direction::Left));
        assert_eq!(last_direction([KeyCode::Left, KeyCode::Down]), Some(Direction::Down));
        assert_eq!(last_direction([KeyCode::W, KeyCode::Space]), Some(Direction::Up));
        assert_eq!(last_direction([KeyCode::Space, KeyCode::Q]), None);
        assert_eq!(last_direction(Vec::new()), None);
    }

    #[test]
    fn arrows_and_wasd_map_alike() {
        assert_eq!(direction_for_key(KeyCode::Right), direction_for_key(KeyCode::D));
        assert_eq!(direction_for_key(KeyCode::Left), Some(Direction::Left));
        assert_eq!(direction_for_key(KeyCode::S), Some(Direction::Down));
        assert_eq!(direction_for_key(KeyCode::Escape), None);
    }
}

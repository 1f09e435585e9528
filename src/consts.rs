// Board geometry (tiles)
pub const BOARD_WIDTH: i32 = 50;
pub const BOARD_HEIGHT: i32 = 50;

// Pixel layout
pub const TILE_SIZE: i32 = 16;
pub const SCORE_BAR_HEIGHT: i32 = 48;
pub const SEGMENT_RADIUS: f32 = 7.0;
pub const FONT_SIZE: u16 = 48;
pub const SCREEN_WIDTH: i32 = BOARD_WIDTH * TILE_SIZE;
pub const SCREEN_HEIGHT: i32 = BOARD_HEIGHT * TILE_SIZE + SCORE_BAR_HEIGHT;

// Pacing
pub const FPS: u64 = 16;
pub const FRAME_MILLIS: u64 = 1000 / FPS; // 62, truncated

// Starting snake
pub const START_LENGTH: usize = 5;
pub const START_X: i32 = 25;
pub const START_Y: i32 = 25;

// Food placement gives up on rejection sampling after this many draws
pub const MAX_PLACEMENT_ATTEMPTS: usize = 256;

// Host loop timing
/// Target frame interval for the terminal loop (~60 fps).
pub const FRAME_INTERVAL_MS: u64 = 16;
/// Largest frame delta fed to a fixed-step scheduler in one call.
pub const MAX_FRAME_DELTA_MS: u64 = 500;

// Snake defaults
pub const DEFAULT_GRID_SIZE: i16 = 20;
/// Largest accepted board side; bigger boards cannot fit any terminal.
pub const MAX_GRID_SIZE: i16 = 100;
pub const DEFAULT_CELL_SIZE: u16 = 25;
pub const DEFAULT_SNAKE_SPEED_MS: u64 = 150;
pub const SNAKE_FOOD_REWARD: u32 = 10;
/// Random draws attempted before falling back to a scan of free cells.
pub const FOOD_SPAWN_ATTEMPTS: u32 = 1_000;

// Persistence
pub const DATA_DIR_NAME: &str = ".arcade";
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const LOG_FILE_NAME: &str = "arcade.log";
pub const HIGH_SCORE_KEY_PREFIX: &str = "highScore_";

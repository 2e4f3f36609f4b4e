pub mod game;

pub const TITLE_TEXT: &str = "Flappy Bad";
pub const JUMP_HINT: &str = "Press SPACE to jump";
pub const START_HINT: &str = "Press SPACE to start";
pub const GAME_OVER_TEXT: &str = "Game Over";
pub const RETRY_HINT: &str = "Press SPACE to retry";
pub const RESIZE_HINT: &str = "Please enlarge the terminal";

use ratatui::style::Color;

// Defaults for `Tuning`, mirrored in .config/config.yaml.
pub const GRAVITY: f32 = 0.4;
pub const JUMP_IMPULSE: f32 = -8.5;
pub const SCROLL_SPEED: f32 = 2.0;
pub const BIRD_X: f32 = 100.0;
pub const BIRD_WIDTH: f32 = 70.0;
pub const BIRD_HEIGHT: f32 = 50.0;
pub const FLAP_TICKS: u16 = 15;
pub const PIPE_WIDTH: f32 = 100.0;
pub const PIPE_HEIGHT: f32 = 500.0;
pub const PIPE_GAP: f32 = 250.0;
pub const PIPE_SPACING: f32 = 300.0;
pub const PIPE_MARGIN: f32 = 100.0;

/// Playfield used until the terminal reports its real size.
pub const INITIAL_WIDTH: f32 = 400.0;
pub const INITIAL_HEIGHT: f32 = 600.0;

/// Retry button, in pixels, centred horizontally with its top at mid-screen.
pub const BUTTON_WIDTH: f32 = 200.0;
pub const BUTTON_HEIGHT: f32 = 60.0;
/// Final score line, below mid-screen.
pub const FINAL_SCORE_OFFSET: f32 = 100.0;

pub const SKY_COLOR: Color = Color::Rgb(135, 206, 235);
pub const TEXT_COLOR: Color = Color::White;
pub const BUTTON_COLOR: Color = Color::Rgb(255, 165, 0);
pub const PIPE_COLOR: Color = Color::LightGreen;
pub const PIPE_LIP_COLOR: Color = Color::Green;
pub const BIRD_COLOR: Color = Color::Yellow;

pub const PIPE_BODY: char = '|';
pub const PIPE_LIP: char = '█';

pub const BIRD_RESTING: [&str; 3] = [
    r"  .---.  ",
    r" ( o  >> ",
    r"  `-\-'  ",
];
pub const BIRD_FLAPPING: [&str; 3] = [
    r" \.---.  ",
    r" \( o >> ",
    r"  `---'  ",
];

use crate::surface::Color;

/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Screen
    pub const SCREEN_WIDTH: i32 = 640;
    pub const SCREEN_HEIGHT: i32 = 480;

    // Paddle
    pub const PADDLE_WIDTH: i32 = 15;
    pub const PADDLE_HEIGHT: i32 = 50;
    pub const PLAYER_X: i32 = 50;
    pub const ENEMY_MARGIN: i32 = 65; // Enemy x = screen width - margin
    pub const PLAYER_SPEED: i32 = 5; // pixels per tick
    pub const ENEMY_STEP: i32 = 4; // pixels per tick, also the snap distance

    // Ball
    pub const BALL_SIZE: i32 = 12;
    pub const BALL_SPEED_X: i32 = 5;
    pub const SERVE_SPREAD_Y: i32 = 3; // change_y in [-3, 3] after a reset
    pub const DEFLECT_SPREAD_Y: i32 = 5; // change_y in [-5, 5] after a player hit

    // Score
    pub const WIN_SCORE: u8 = 10;
    pub const WIN_MESSAGE_MS: u64 = 3000;

    // Playfield decoration
    pub const NET_DASH: i32 = 10;
    pub const NET_SPACING: i32 = 20;
    pub const PLAYER_SCORE_POS: (i32, i32) = (270, 10);
    pub const ENEMY_SCORE_POS: (i32, i32) = (350, 10);

    // Colors
    pub const BACKGROUND: Color = Color::BLACK;
    pub const FOREGROUND: Color = Color::WHITE;
    pub const ABOUT_COLOR: Color = Color::RED;

    // Text
    pub const ABOUT_TEXT: &'static str = "Arrows move, Esc for menu";
    pub const PLAYER_WON_TEXT: &'static str = "You Won!";
    pub const ENEMY_WON_TEXT: &'static str = "You lost";
}

use std::time::Duration;

use glam::IVec2;

use crate::params::Params;
use crate::surface::Color;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub screen_width: i32,
    pub screen_height: i32,
    pub paddle_size: IVec2,
    pub player_x: i32,
    pub enemy_x: i32,
    pub player_speed: i32,
    pub enemy_step: i32,
    pub ball_size: IVec2,
    pub ball_speed_x: i32,
    pub serve_spread_y: i32,
    pub deflect_spread_y: i32,
    pub win_score: u8,
    pub win_message_delay: Duration,
    pub net_dash: i32,
    pub net_spacing: i32,
    pub player_score_pos: IVec2,
    pub enemy_score_pos: IVec2,
    pub background: Color,
    pub foreground: Color,
    pub about_color: Color,
    pub about_text: String,
    pub player_won_text: String,
    pub enemy_won_text: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: Params::SCREEN_WIDTH,
            screen_height: Params::SCREEN_HEIGHT,
            paddle_size: IVec2::new(Params::PADDLE_WIDTH, Params::PADDLE_HEIGHT),
            player_x: Params::PLAYER_X,
            enemy_x: Params::SCREEN_WIDTH - Params::ENEMY_MARGIN,
            player_speed: Params::PLAYER_SPEED,
            enemy_step: Params::ENEMY_STEP,
            ball_size: IVec2::splat(Params::BALL_SIZE),
            ball_speed_x: Params::BALL_SPEED_X,
            serve_spread_y: Params::SERVE_SPREAD_Y,
            deflect_spread_y: Params::DEFLECT_SPREAD_Y,
            win_score: Params::WIN_SCORE,
            win_message_delay: Duration::from_millis(Params::WIN_MESSAGE_MS),
            net_dash: Params::NET_DASH,
            net_spacing: Params::NET_SPACING,
            player_score_pos: IVec2::from(Params::PLAYER_SCORE_POS),
            enemy_score_pos: IVec2::from(Params::ENEMY_SCORE_POS),
            background: Params::BACKGROUND,
            foreground: Params::FOREGROUND,
            about_color: Params::ABOUT_COLOR,
            about_text: Params::ABOUT_TEXT.to_string(),
            player_won_text: Params::PLAYER_WON_TEXT.to_string(),
            enemy_won_text: Params::ENEMY_WON_TEXT.to_string(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Center of the screen, also where the ball serves from
    pub fn screen_center(&self) -> IVec2 {
        IVec2::new(self.screen_width / 2, self.screen_height / 2)
    }

    /// Top-left corner of the player paddle when the game is created
    pub fn player_start(&self) -> IVec2 {
        IVec2::new(self.player_x, self.screen_height / 2)
    }

    /// Top-left corner of the enemy paddle when the game is created
    pub fn enemy_start(&self) -> IVec2 {
        IVec2::new(self.enemy_x, self.screen_height / 2)
    }
}

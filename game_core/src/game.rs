use glam::IVec2;
use hecs::World;

use crate::systems::current_ball;
use crate::{
    create_ball, create_enemy, create_player, step, Ball, Clock, Color, Config, Control,
    EnemyTracker, Events, GameRng, InputEvent, Key, Menu, MenuSelection, Mode, ModeAction,
    ModeFsm, Paddle, PlayerControl, Rect, Score, Side, SoundTrigger, Surface,
};

/// Owns the ball, both paddles, the score and the current mode, and sequences
/// one frame as events, then logic, then drawing.
pub struct Game {
    pub world: World,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub rng: GameRng,
    fsm: ModeFsm,
}

impl Game {
    pub fn new(config: Config, rng: GameRng) -> Self {
        let mut world = World::new();
        create_ball(&mut world, &config, config.screen_center(), IVec2::ZERO);
        create_player(&mut world, &config);
        create_enemy(&mut world, &config);

        Self {
            world,
            config,
            score: Score::new(),
            events: Events::new(),
            rng,
            fsm: ModeFsm::new(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.fsm.mode()
    }

    pub fn ball(&self) -> Option<Ball> {
        current_ball(&self.world)
    }

    pub fn player(&self) -> Option<Paddle> {
        self.world
            .query::<(&Paddle, &PlayerControl)>()
            .iter()
            .next()
            .map(|(_e, (paddle, _control))| *paddle)
    }

    pub fn player_control(&self) -> Option<PlayerControl> {
        self.world
            .query::<&PlayerControl>()
            .iter()
            .next()
            .map(|(_e, control)| *control)
    }

    pub fn enemy(&self) -> Option<Paddle> {
        self.world
            .query::<(&Paddle, &EnemyTracker)>()
            .iter()
            .next()
            .map(|(_e, (paddle, _tracker))| *paddle)
    }

    /// Drain this frame's input. Every event except `Quit` is shown to the menu
    /// first; the menu's selection is only read when confirm is pressed.
    pub fn process_events<I>(&mut self, events: I, menu: &mut dyn Menu) -> Control
    where
        I: IntoIterator<Item = InputEvent>,
    {
        for event in events {
            if event == InputEvent::Quit {
                log::info!("Quit requested");
                return Control::Quit;
            }

            menu.handle_event(&event);

            match event {
                InputEvent::KeyDown(Key::Confirm) => {
                    if self.fsm.mode() != Mode::Menu {
                        continue;
                    }
                    match menu.selection() {
                        MenuSelection::Start => {
                            self.fsm.transition(ModeAction::Start);
                            self.game_init();
                        }
                        MenuSelection::About => {
                            self.fsm.transition(ModeAction::ShowAbout);
                        }
                        MenuSelection::Exit => {
                            log::info!("Exit selected from the menu");
                            return Control::Quit;
                        }
                    }
                }
                InputEvent::KeyDown(Key::Escape) => {
                    self.fsm.transition(ModeAction::Back);
                }
                InputEvent::KeyDown(Key::Up) => self.steer(PlayerControl::go_up),
                InputEvent::KeyDown(Key::Down) => self.steer(PlayerControl::go_down),
                InputEvent::KeyUp(Key::Up | Key::Down) => self.steer(PlayerControl::stop),
                _ => {}
            }
        }
        Control::Continue
    }

    fn steer(&mut self, action: fn(&mut PlayerControl)) {
        for (_entity, control) in self.world.query_mut::<&mut PlayerControl>() {
            action(control);
        }
    }

    /// Serve a fresh ball, center both paddles and clear the score
    pub fn game_init(&mut self) {
        let config = &self.config;
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.reset(
                config.screen_center(),
                config.ball_speed_x,
                config.serve_spread_y,
                &mut self.rng,
            );
        }
        for (_entity, paddle) in self.world.query_mut::<&mut Paddle>() {
            paddle.rect.set_center_y(config.screen_height / 2);
        }
        self.score.reset();
        log::info!("New game started");
    }

    /// Advance the simulation one tick. Does nothing outside of `Playing`.
    pub fn run_logic(&mut self, sound: &mut dyn SoundTrigger) {
        if !self.fsm.is_playing() {
            return;
        }

        step(
            &mut self.world,
            &self.config,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
            sound,
        );

        if let Some(winner) = self.score.has_winner(self.config.win_score) {
            log::info!(
                "{winner:?} won {}-{}",
                self.score.player,
                self.score.enemy
            );
            let action = match winner {
                Side::Player => ModeAction::PlayerReachedWin,
                Side::Enemy => ModeAction::EnemyReachedWin,
            };
            self.fsm.transition(action);
        }
    }

    /// Draw the current mode and present it.
    ///
    /// A win/lose message resets the score and returns to the menu, then blocks
    /// on `clock` for the configured delay after presenting.
    pub fn display_frame(&mut self, surface: &mut dyn Surface, menu: &dyn Menu, clock: &mut dyn Clock) {
        surface.fill(self.config.background);

        let mut time_wait = false;
        match self.fsm.mode() {
            Mode::Menu => menu.display_frame(surface),
            Mode::About => {
                self.display_message(surface, &self.config.about_text, self.config.about_color)
            }
            mode @ (Mode::PlayerWon | Mode::EnemyWon) => {
                let text = if mode == Mode::PlayerWon {
                    &self.config.player_won_text
                } else {
                    &self.config.enemy_won_text
                };
                self.display_message(surface, text, self.config.foreground);
                time_wait = true;
                self.score.reset();
                self.fsm.transition(ModeAction::WinShown);
            }
            Mode::Playing => self.draw_playfield(surface),
        }

        surface.present();

        if time_wait {
            clock.wait(self.config.win_message_delay);
        }
    }

    /// Draw `text` centered on the screen
    pub fn display_message(&self, surface: &mut dyn Surface, text: &str, color: Color) {
        let label = surface.render_text(text, color);
        let pos = IVec2::new(
            self.config.screen_width / 2 - label.width() / 2,
            self.config.screen_height / 2 - label.height() / 2,
        );
        surface.blit(&label, pos);
    }

    fn draw_playfield(&self, surface: &mut dyn Surface) {
        let config = &self.config;
        let color = config.foreground;

        if let Some(ball) = self.ball() {
            ball.draw(surface, color);
        }
        if let Some(player) = self.player() {
            player.draw(surface, color);
        }
        if let Some(enemy) = self.enemy() {
            enemy.draw(surface, color);
        }

        // Dashed net down the middle
        let net_x = config.screen_width / 2;
        for y in (0..config.screen_height).step_by(config.net_spacing.max(1) as usize) {
            surface.draw_rect(Rect::from_xywh(net_x, y, config.net_dash, config.net_dash), color);
        }

        let player_label = surface.render_text(&self.score.player.to_string(), color);
        surface.blit(&player_label, config.player_score_pos);
        let enemy_label = surface.render_text(&self.score.enemy.to_string(), color);
        surface.blit(&enemy_label, config.enemy_score_pos);
    }
}

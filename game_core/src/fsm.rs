//! Game mode state machine
//!
//! One mode at a time: the menu, the about screen, a game in progress, or the
//! win/lose message that sends the player back to the menu.

/// Game modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Menu,
    About,
    Playing,
    PlayerWon,
    EnemyWon,
}

/// Actions that trigger mode transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeAction {
    Start,
    ShowAbout,
    Back,
    PlayerReachedWin,
    EnemyReachedWin,
    WinShown,
}

/// Result of a mode transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from: Mode,
    pub to: Mode,
    pub action: ModeAction,
}

/// Mode finite state machine
#[derive(Debug, Clone)]
pub struct ModeFsm {
    mode: Mode,
}

impl ModeFsm {
    pub fn new() -> Self {
        Self { mode: Mode::Menu }
    }

    /// Get current mode
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: ModeAction) -> bool {
        self.next_mode(action).is_some()
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: ModeAction) -> TransitionResult {
        let from = self.mode;

        match self.next_mode(action) {
            Some(to) => {
                self.mode = to;
                log::debug!("Mode {from:?} -> {to:?} on {action:?}");
                TransitionResult {
                    success: true,
                    from,
                    to,
                    action,
                }
            }
            None => {
                log::trace!("Ignored {action:?} in {from:?}");
                TransitionResult {
                    success: false,
                    from,
                    to: from,
                    action,
                }
            }
        }
    }

    /// Get next mode for a given action (if valid)
    fn next_mode(&self, action: ModeAction) -> Option<Mode> {
        match (self.mode, action) {
            // From Menu
            (Mode::Menu, ModeAction::Start) => Some(Mode::Playing),
            (Mode::Menu, ModeAction::ShowAbout) => Some(Mode::About),

            // From About
            (Mode::About, ModeAction::Back) => Some(Mode::Menu),

            // From Playing (scores survive going back to the menu)
            (Mode::Playing, ModeAction::Back) => Some(Mode::Menu),
            (Mode::Playing, ModeAction::PlayerReachedWin) => Some(Mode::PlayerWon),
            (Mode::Playing, ModeAction::EnemyReachedWin) => Some(Mode::EnemyWon),

            // From the win/lose message
            (Mode::PlayerWon | Mode::EnemyWon, ModeAction::WinShown) => Some(Mode::Menu),

            // Invalid transition
            _ => None,
        }
    }

    /// Check if a game is in progress
    pub fn is_playing(&self) -> bool {
        self.mode == Mode::Playing
    }

    /// Check if a win/lose message is pending
    pub fn is_game_over(&self) -> bool {
        matches!(self.mode, Mode::PlayerWon | Mode::EnemyWon)
    }
}

impl Default for ModeFsm {
    fn default() -> Self {
        Self::new()
    }
}

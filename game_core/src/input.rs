/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Confirm,
    Escape,
    Other,
}

/// One discrete input event, consumed once per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    KeyDown(Key),
    KeyUp(Key),
}

/// Whether the frame loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// Menu entries in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuSelection {
    Start,
    About,
    Exit,
}

impl MenuSelection {
    pub const ALL: [MenuSelection; 3] = [
        MenuSelection::Start,
        MenuSelection::About,
        MenuSelection::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuSelection::Start => "start",
            MenuSelection::About => "about",
            MenuSelection::Exit => "exit",
        }
    }
}

/// Menu widget owned by the frontend. The game only reads its selection on confirm.
pub trait Menu {
    fn handle_event(&mut self, event: &InputEvent);
    fn selection(&self) -> MenuSelection;
    fn display_frame(&self, surface: &mut dyn crate::surface::Surface);
}

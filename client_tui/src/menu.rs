use game_core::{Color, InputEvent, Key, Menu, MenuSelection, Surface};
use glam::IVec2;

/// Vertical list of the menu entries, centered on the screen.
///
/// Up/Down move the highlight and wrap around at either end.
#[derive(Debug, Clone)]
pub struct ListMenu {
    selected: usize,
    screen: IVec2,
    color: Color,
    highlight: Color,
    spacing: i32,
}

impl ListMenu {
    pub fn new(screen: IVec2, color: Color, highlight: Color) -> Self {
        Self {
            selected: 0,
            screen,
            color,
            highlight,
            spacing: 10,
        }
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    fn move_by(&mut self, offset: isize) {
        let len = MenuSelection::ALL.len() as isize;
        self.selected = (self.selected as isize + offset).rem_euclid(len) as usize;
        log::debug!("Menu selection: {:?}", self.selection());
    }
}

impl Menu for ListMenu {
    fn handle_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::KeyDown(Key::Up) => self.move_by(-1),
            InputEvent::KeyDown(Key::Down) => self.move_by(1),
            _ => {}
        }
    }

    fn selection(&self) -> MenuSelection {
        MenuSelection::ALL[self.selected]
    }

    fn display_frame(&self, surface: &mut dyn Surface) {
        let labels: Vec<_> = MenuSelection::ALL
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let color = if i == self.selected {
                    self.highlight
                } else {
                    self.color
                };
                surface.render_text(item.label(), color)
            })
            .collect();

        let total: i32 = labels.iter().map(|l| l.height() + self.spacing).sum::<i32>() - self.spacing;
        let mut y = self.screen.y / 2 - total / 2;
        for label in &labels {
            let x = self.screen.x / 2 - label.width() / 2;
            surface.blit(label, IVec2::new(x, y));
            y += label.height() + self.spacing;
        }
    }
}

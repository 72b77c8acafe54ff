//! Terminal rendering surface
//!
//! The game draws in screen pixels. A frame's commands are collected and painted
//! onto a ratatui canvas, scaled to whatever size the terminal has, when the
//! frame is presented.

use std::io;

use game_core::{Color, Label, Rect, Surface};
use glam::IVec2;
use ratatui::backend::Backend;
use ratatui::style::{Color as TermColor, Style};
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::canvas::{Canvas, Context, Line};
use ratatui::Terminal;

/// One recorded draw call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    Rect(Rect, Color),
    Text(Label, IVec2),
}

pub struct TerminalSurface<B: Backend> {
    terminal: Terminal<B>,
    screen: IVec2,
    glyph: IVec2,
    background: Color,
    commands: Vec<DrawCommand>,
    error: Option<io::Error>,
}

impl<B: Backend> TerminalSurface<B> {
    /// `glyph` is the size in screen pixels one character cell covers
    pub fn new(terminal: Terminal<B>, screen: IVec2, glyph: IVec2) -> Self {
        Self {
            terminal,
            screen,
            glyph: glyph.max(IVec2::ONE),
            background: Color::BLACK,
            commands: Vec::new(),
            error: None,
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// First I/O error since the last call, if presenting failed
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    fn record_error(&mut self, error: io::Error) {
        log::error!("Presenting frame failed: {error}");
        if self.error.is_none() {
            self.error = Some(error);
        }
    }
}

impl<B: Backend> Surface for TerminalSurface<B> {
    fn fill(&mut self, color: Color) {
        // Filling covers everything drawn so far
        self.background = color;
        self.commands.clear();
    }

    fn draw_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::Rect(rect, color));
    }

    fn render_text(&mut self, text: &str, color: Color) -> Label {
        let columns = text.chars().count() as i32;
        Label {
            text: text.to_string(),
            color,
            size: IVec2::new(self.glyph.x * columns, self.glyph.y),
        }
    }

    fn blit(&mut self, label: &Label, pos: IVec2) {
        self.commands.push(DrawCommand::Text(label.clone(), pos));
    }

    fn present(&mut self) {
        let commands = std::mem::take(&mut self.commands);
        let screen = self.screen;
        let background = term_color(self.background);

        let mut drawn_area = None;
        let result = self.terminal.draw(|frame| {
            let area = frame.area();
            drawn_area = Some(area);
            let row_step = (screen.y / i32::from(area.height.max(1))).max(1);
            let canvas = Canvas::default()
                .marker(Marker::Block)
                .background_color(background)
                .x_bounds([0.0, f64::from(screen.x)])
                .y_bounds([0.0, f64::from(screen.y)])
                .paint(|ctx| paint_commands(ctx, &commands, screen.y, row_step));
            frame.render_widget(canvas, area);
        });

        if let Err(error) = result {
            self.record_error(error);
        }

        // Measure text for the size the terminal has now
        if let Some(area) = drawn_area {
            self.glyph = glyph_for(screen, area.width, area.height);
        }
    }
}

/// Glyph size that maps a terminal of `cols` x `rows` cells onto `screen`
pub fn glyph_for(screen: IVec2, cols: u16, rows: u16) -> IVec2 {
    let cells = IVec2::new(i32::from(cols), i32::from(rows)).max(IVec2::ONE);
    (screen / cells).max(IVec2::ONE)
}

fn term_color(color: Color) -> TermColor {
    TermColor::Rgb(color.r, color.g, color.b)
}

/// Paint recorded commands, flipping y so screen row 0 is the top line
fn paint_commands(ctx: &mut Context, commands: &[DrawCommand], screen_height: i32, row_step: i32) {
    let flip = |y: i32| f64::from(screen_height - y);

    for command in commands {
        if let DrawCommand::Rect(rect, color) = command {
            if rect.size.x <= 0 || rect.size.y <= 0 {
                continue;
            }
            let color = term_color(*color);
            let x1 = f64::from(rect.left());
            let x2 = f64::from(rect.right() - 1);
            let last = rect.bottom() - 1;
            let rows = (rect.top()..last).step_by(row_step as usize).chain(Some(last));
            for y in rows {
                ctx.draw(&Line::new(x1, flip(y), x2, flip(y), color));
            }
        }
    }

    // Text goes on top of shapes
    ctx.layer();
    for command in commands {
        if let DrawCommand::Text(label, pos) = command {
            let style = Style::default().fg(term_color(label.color));
            ctx.print(
                f64::from(pos.x),
                flip(pos.y),
                Span::styled(label.text.clone(), style),
            );
        }
    }
}

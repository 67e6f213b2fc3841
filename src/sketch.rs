//! Frame-driven application state.
//!
//! A [`Sketch`] is set up once from the configuration and then asked to draw
//! one frame per refresh. User actions arrive between frames as [`Command`]s.

use crate::board::{Board, Command};
use crate::config::Config;
use crate::draw::{Canvas, Color, Frame};
use crate::label::Theme;
use crate::util::Rect;
use log::{debug, warn};

/// The running sketch: label registry plus everything needed to draw it.
#[derive(Debug, Clone)]
pub struct Sketch {
    board: Board,
    theme: Theme,
    background: Color,
    width: u32,
    height: u32,
}

impl Sketch {
    /// Builds the board from the configured labels and applies the startup selection.
    pub fn setup(config: &Config) -> Self {
        let mut board = Board::new(config.labels());
        if let Some(index) = config.initial_selection() {
            board.select(index);
        }

        debug!(
            "Sketch set up with {} labels on a {}x{} canvas",
            board.len(),
            config.canvas.width,
            config.canvas.height
        );

        Self {
            board,
            theme: config.theme(),
            background: config.background(),
            width: config.canvas.width,
            height: config.canvas.height,
        }
    }

    /// Canvas size in pixels.
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// The label registry.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Applies a user action between frames. Returns `true` if anything changed.
    pub fn apply(&mut self, command: Command) -> bool {
        let changed = command.apply(&mut self.board);
        debug!(
            "Command '{}' {}",
            command,
            if changed { "applied" } else { "ignored" }
        );
        changed
    }

    /// Draws one frame: the background, then every slot exactly once.
    pub fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.background(self.background);
        self.board.draw(canvas, &self.theme);
    }

    /// Draws one frame into a recording.
    ///
    /// Logs a warning when borders reach past the canvas edges.
    pub fn record_frame(&self) -> Frame {
        let mut frame = Frame::new();
        self.draw(&mut frame);

        let canvas = Rect {
            x: 0,
            y: 0,
            width: self.width as i32,
            height: self.height as i32,
        };
        if let Some(bounds) = frame.bounds() {
            if !canvas.contains(&bounds) {
                warn!(
                    "Borders extend past the {}x{} canvas (drawn area {:?})",
                    self.width, self.height, bounds
                );
            }
        }

        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::Primitive;
    use crate::label::DecoratorKind;

    #[test]
    fn setup_selects_first_label() {
        let sketch = Sketch::setup(&Config::default());
        assert_eq!(sketch.board().selected(), Some(0));
        assert_eq!(sketch.size(), (600, 400));
    }

    #[test]
    fn frame_starts_with_background_and_draws_each_label_once() {
        let mut sketch = Sketch::setup(&Config::default());
        sketch.apply(Command::Add(DecoratorKind::Thin));
        sketch.apply(Command::Add(DecoratorKind::Glow));

        let frame = sketch.record_frame();
        assert!(matches!(
            frame.primitives.first(),
            Some(Primitive::Background { .. })
        ));
        assert_eq!(frame.texts().count(), 5);
    }

    #[test]
    fn apply_reports_noops() {
        let mut sketch = Sketch::setup(&Config::default());
        assert!(!sketch.apply(Command::RemoveLast));
        assert!(sketch.apply(Command::Add(DecoratorKind::Dots)));
        assert!(sketch.apply(Command::RemoveLast));
    }
}

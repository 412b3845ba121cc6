//! Drawing surface capability.
//!
//! Shapes never know which backend they are drawn on. They receive a
//! `&mut impl DrawSurface`, push/pop its paint state around their own
//! brush and pen changes, and issue ellipse commands against it.

use std::ops::{Deref, DerefMut};

use super::color::Color;

/// Integer pixel rectangle; `(x, y)` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Center point in floating point pixels.
    pub fn center(&self) -> (f32, f32) {
        (
            self.x as f32 + self.width as f32 / 2.0,
            self.y as f32 + self.height as f32 / 2.0,
        )
    }

    /// Half-extents, i.e. the radii of the inscribed ellipse.
    pub fn half_size(&self) -> (f32, f32) {
        (self.width as f32 / 2.0, self.height as f32 / 2.0)
    }
}

/// Outline settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pen {
    pub color: Color,
    pub width: u32,
}

/// The mutable drawing state a surface carries between commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaintState {
    /// Fill; `None` leaves shape interiors unpainted.
    pub brush: Option<Color>,
    /// Outline; `None` draws no outline.
    pub pen: Option<Pen>,
}

impl Default for PaintState {
    fn default() -> Self {
        Self {
            brush: None,
            pen: Some(Pen {
                color: Color::BLACK,
                width: 1,
            }),
        }
    }
}

/// Target that accepts shape drawing commands.
pub trait DrawSurface {
    /// Push the current paint state.
    fn save_state(&mut self);

    /// Pop the most recently saved paint state.
    fn restore_state(&mut self);

    fn set_fill_color(&mut self, color: Color);

    fn set_stroke_color(&mut self, color: Color, width: u32);

    /// Draw the ellipse inscribed in `bounds` with the current brush and pen.
    fn draw_ellipse(&mut self, bounds: Rect);
}

/// Save/restore bookkeeping shared by the concrete surfaces.
#[derive(Debug, Clone, Default)]
pub struct StateStack {
    current: PaintState,
    saved: Vec<PaintState>,
}

impl StateStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &PaintState {
        &self.current
    }

    pub fn current_mut(&mut self) -> &mut PaintState {
        &mut self.current
    }

    /// Number of states waiting to be restored.
    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    pub fn save(&mut self) {
        self.saved.push(self.current);
    }

    /// Unbalanced restores leave the current state untouched.
    pub fn restore(&mut self) {
        match self.saved.pop() {
            Some(state) => self.current = state,
            None => tracing::warn!("restore_state called without a matching save_state"),
        }
    }
}

/// Saves surface state on creation and restores it when dropped.
pub struct StateGuard<'a, S: DrawSurface + ?Sized> {
    surface: &'a mut S,
}

impl<'a, S: DrawSurface + ?Sized> StateGuard<'a, S> {
    pub fn new(surface: &'a mut S) -> Self {
        surface.save_state();
        Self { surface }
    }
}

impl<S: DrawSurface + ?Sized> Deref for StateGuard<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: DrawSurface + ?Sized> DerefMut for StateGuard<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: DrawSurface + ?Sized> Drop for StateGuard<'_, S> {
    fn drop(&mut self) {
        self.surface.restore_state();
    }
}

/// A command as seen by a [`RecordingSurface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceCommand {
    Save,
    Restore,
    SetFill(Color),
    SetStroke(Color, u32),
    /// Ellipse together with the paint state it was drawn with.
    Ellipse { bounds: Rect, state: PaintState },
}

/// Surface that only remembers what it was asked to do.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    commands: Vec<SurfaceCommand>,
    stack: StateStack,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[SurfaceCommand] {
        &self.commands
    }

    pub fn state(&self) -> &PaintState {
        self.stack.current()
    }

    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    /// Ellipses drawn so far, in order.
    pub fn ellipses(&self) -> impl Iterator<Item = (Rect, PaintState)> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            SurfaceCommand::Ellipse { bounds, state } => Some((*bounds, *state)),
            _ => None,
        })
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl DrawSurface for RecordingSurface {
    fn save_state(&mut self) {
        self.stack.save();
        self.commands.push(SurfaceCommand::Save);
    }

    fn restore_state(&mut self) {
        self.stack.restore();
        self.commands.push(SurfaceCommand::Restore);
    }

    fn set_fill_color(&mut self, color: Color) {
        self.stack.current_mut().brush = Some(color);
        self.commands.push(SurfaceCommand::SetFill(color));
    }

    fn set_stroke_color(&mut self, color: Color, width: u32) {
        self.stack.current_mut().pen = Some(Pen { color, width });
        self.commands.push(SurfaceCommand::SetStroke(color, width));
    }

    fn draw_ellipse(&mut self, bounds: Rect) {
        let state = *self.stack.current();
        self.commands.push(SurfaceCommand::Ellipse { bounds, state });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_center_and_half_size() {
        let rect = Rect::new(90, 40, 21, 21);
        assert_eq!(rect.center(), (100.5, 50.5));
        assert_eq!(rect.half_size(), (10.5, 10.5));
    }

    #[test]
    fn test_state_stack_restores_saved_state() {
        let mut stack = StateStack::new();
        stack.save();
        stack.current_mut().brush = Some(Color::RED);
        stack.current_mut().pen = None;
        assert_eq!(stack.depth(), 1);

        stack.restore();
        assert_eq!(*stack.current(), PaintState::default());
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    fn test_unbalanced_restore_keeps_state() {
        let mut stack = StateStack::new();
        stack.current_mut().brush = Some(Color::BLUE);
        stack.restore();
        assert_eq!(stack.current().brush, Some(Color::BLUE));
    }

    #[test]
    fn test_guard_restores_on_drop() {
        let mut surface = RecordingSurface::new();
        {
            let mut guard = StateGuard::new(&mut surface);
            guard.set_fill_color(Color::GREEN);
            assert_eq!(guard.depth(), 1);
        }
        assert_eq!(surface.depth(), 0);
        assert_eq!(*surface.state(), PaintState::default());
        assert_eq!(
            surface.commands(),
            &[
                SurfaceCommand::Save,
                SurfaceCommand::SetFill(Color::GREEN),
                SurfaceCommand::Restore,
            ]
        );
    }

    #[test]
    fn test_recording_captures_state_per_ellipse() {
        let mut surface = RecordingSurface::new();
        surface.set_fill_color(Color::CYAN);
        surface.draw_ellipse(Rect::new(0, 0, 10, 10));
        surface.set_stroke_color(Color::PINK, 3);
        surface.draw_ellipse(Rect::new(5, 5, 2, 2));

        let ellipses: Vec<_> = surface.ellipses().collect();
        assert_eq!(ellipses.len(), 2);
        assert_eq!(ellipses[0].1.brush, Some(Color::CYAN));
        assert_eq!(ellipses[0].1.pen.map(|p| p.color), Some(Color::BLACK));
        assert_eq!(
            ellipses[1].1.pen,
            Some(Pen {
                color: Color::PINK,
                width: 3
            })
        );
    }
}

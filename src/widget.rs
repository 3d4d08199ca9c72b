//! Relayout and auto-draw
//!
//! Setters only store values and mark the widget stale. Derived state (a
//! row's cells, a table's rows) is rebuilt by `relayout`. `update` runs a
//! batch of mutations, relayouts once, then draws if auto-draw is on, so a
//! redraw never observes a half-applied change.

use crate::error::Result;
use crate::screen::Screen;

pub trait Widget {
    /// Rebuild derived state from the current properties
    fn relayout(&mut self) {}

    /// Paint onto the screen, relayouting first if stale
    fn draw(&mut self, screen: &mut dyn Screen) -> Result<()>;

    /// Whether `update` should redraw
    fn auto_draw(&self) -> bool;

    /// Apply `change`, relayout, then redraw when auto-draw is on.
    ///
    /// The relayout happens even when `change` fails, keeping derived state
    /// in step with whatever part of the change was applied.
    fn update<F>(&mut self, screen: &mut dyn Screen, change: F) -> Result<()>
    where
        Self: Sized,
        F: FnOnce(&mut Self) -> Result<()>,
    {
        let outcome = change(self);
        self.relayout();
        outcome?;
        if self.auto_draw() {
            self.draw(screen)?;
        }
        Ok(())
    }
}

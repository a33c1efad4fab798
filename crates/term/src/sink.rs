//! TerminalSink: the [`RenderSink`] the game session presents frames to.

use anyhow::Result;
use crossterm::terminal;

use crate::core::{RenderSink, Snapshot};
use crate::fb::FrameBuffer;
use crate::game_view::{GameView, Viewport};
use crate::renderer::TerminalRenderer;

pub struct TerminalSink {
    view: GameView,
    renderer: TerminalRenderer,
    fb: FrameBuffer,
}

impl TerminalSink {
    pub fn new(view: GameView) -> Self {
        Self {
            view,
            renderer: TerminalRenderer::new(),
            fb: FrameBuffer::new(0, 0),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        self.renderer.enter()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.renderer.exit()
    }

    /// Call after a terminal resize so the next frame is redrawn in full.
    pub fn invalidate(&mut self) {
        self.renderer.invalidate();
    }
}

impl RenderSink for TerminalSink {
    type Error = anyhow::Error;

    fn present(&mut self, snapshot: &Snapshot) -> Result<()> {
        let (width, height) = terminal::size()?;
        self.view
            .render_into(snapshot, Viewport::new(width, height), &mut self.fb);
        self.renderer.draw(&self.fb)
    }
}

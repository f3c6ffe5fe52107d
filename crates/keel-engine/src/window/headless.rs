use std::collections::VecDeque;

use crate::input::InputEvent;

use super::{ClearColor, Window};

/// A window with no surface.
///
/// Each `poll_events` call yields the next scripted batch of input (or
/// nothing). Useful for automated runs and tests.
#[derive(Debug, Default)]
pub struct HeadlessWindow {
    title: String,
    size: (u32, u32),
    batches: VecDeque<Vec<InputEvent>>,
    closing: bool,
    frames_cleared: u64,
    frames_presented: u64,
    last_clear: Option<ClearColor>,
}

impl HeadlessWindow {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: (width, height),
            ..Self::default()
        }
    }

    /// Queues a batch of events delivered by one future `poll_events`.
    pub fn push_batch(&mut self, events: Vec<InputEvent>) {
        self.batches.push_back(events);
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn frames_cleared(&self) -> u64 {
        self.frames_cleared
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    pub fn last_clear(&self) -> Option<ClearColor> {
        self.last_clear
    }
}

impl Window for HeadlessWindow {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        self.batches.pop_front().unwrap_or_default()
    }

    fn close_requested(&self) -> bool {
        self.closing
    }

    fn set_closing(&mut self, closing: bool) {
        self.closing = closing;
    }

    fn set_title(&mut self, title: &str) {
        if self.title != title {
            self.title = title.to_string();
        }
    }

    fn clear(&mut self, color: ClearColor) {
        self.frames_cleared += 1;
        self.last_clear = Some(color);
    }

    fn swap_buffers(&mut self) {
        self.frames_presented += 1;
    }

    fn inner_size(&self) -> (u32, u32) {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Key, KeyState};

    #[test]
    fn batches_are_delivered_one_per_poll() {
        let mut w = HeadlessWindow::new(4, 4);
        w.push_batch(vec![InputEvent::key(Key::P, KeyState::Pressed)]);

        assert_eq!(w.poll_events().len(), 1);
        assert!(w.poll_events().is_empty());
    }

    #[test]
    fn counts_cleared_and_presented_frames() {
        let mut w = HeadlessWindow::new(4, 4);
        w.clear(ClearColor::new(0.0, 0.0, 0.0, 1.0));
        w.swap_buffers();

        assert_eq!(w.frames_cleared(), 1);
        assert_eq!(w.frames_presented(), 1);
        assert_eq!(w.last_clear(), Some(ClearColor::new(0.0, 0.0, 0.0, 1.0)));
    }
}

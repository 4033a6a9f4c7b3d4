use crate::{Flow, Pacer, Result, SpeedMode};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::{Duration, Instant};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Key {
    Advance,
    Quit,
}

fn classify(key: &KeyEvent) -> Option<Key> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Key::Quit),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Key::Quit),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Key::Advance),
        _ => None,
    }
}

/// Paces generations and listens to the keyboard while waiting.
///
/// Timed modes wait out whatever is left of the frame time after rendering and
/// computing the generation.
pub struct KeyboardPacer {
    frame_timer: Instant,
    frametime_smoothed: f64,
}

impl Default for KeyboardPacer {
    fn default() -> Self {
        Self {
            frame_timer: Instant::now(),
            frametime_smoothed: 0.,
        }
    }
}

impl KeyboardPacer {
    /// Generations per second, smoothed over recent frames.
    pub fn rate(&self) -> f64 {
        1. / self.frametime_smoothed
    }

    fn wait(&self, target_frametime: Duration) -> Result<Flow> {
        let deadline = self.frame_timer + target_frametime;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return Ok(Flow::Continue);
            }
            if event::poll(remaining)? {
                if let Event::Key(key) = event::read()? {
                    if classify(&key) == Some(Key::Quit) {
                        return Ok(Flow::Interrupted);
                    }
                }
            }
        }
    }

    fn wait_for_key() -> Result<Flow> {
        loop {
            if let Event::Key(key) = event::read()? {
                match classify(&key) {
                    Some(Key::Advance) => return Ok(Flow::Continue),
                    Some(Key::Quit) => return Ok(Flow::Interrupted),
                    None => {}
                }
            }
        }
    }
}

impl Pacer for KeyboardPacer {
    fn pause(&mut self, mode: SpeedMode) -> Result<Flow> {
        let flow = match mode.delay() {
            Some(frametime) => self.wait(frametime)?,
            None => Self::wait_for_key()?,
        };

        let frametime = self.frame_timer.elapsed().as_secs_f64();
        self.frametime_smoothed += (frametime - self.frametime_smoothed) * 0.1;
        self.frame_timer = Instant::now();
        Ok(flow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_classify() {
        let none = KeyModifiers::NONE;
        assert_eq!(
            classify(&press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Key::Quit)
        );
        assert_eq!(classify(&press(KeyCode::Char('c'), none)), None);
        assert_eq!(classify(&press(KeyCode::Char('q'), none)), Some(Key::Quit));
        assert_eq!(classify(&press(KeyCode::Esc, none)), Some(Key::Quit));
        assert_eq!(classify(&press(KeyCode::Enter, none)), Some(Key::Advance));
        assert_eq!(classify(&press(KeyCode::Char(' '), none)), Some(Key::Advance));

        let mut release = press(KeyCode::Enter, none);
        release.kind = KeyEventKind::Release;
        assert_eq!(classify(&release), None);
    }
}

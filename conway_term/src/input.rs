// input.rs - Non-blocking quit polling

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What the pending input asked for since the last tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Poll {
    pub quit: bool,
    /// Latest terminal size reported by a resize event.
    pub resized: Option<(u16, u16)>,
}

impl Poll {
    /// Folds one event into the result.
    pub fn absorb(&mut self, event: &Event, quit_key: char) {
        if is_quit(event, quit_key) {
            self.quit = true;
        }
        if let Event::Resize(cols, rows) = *event {
            self.resized = Some((cols, rows));
        }
    }
}

/// Drains pending terminal events without blocking.
pub fn poll(quit_key: char) -> io::Result<Poll> {
    let mut result = Poll::default();
    while event::poll(Duration::ZERO)? {
        result.absorb(&event::read()?, quit_key);
    }
    Ok(result)
}

/// `quit_key` in either case, or Ctrl+C (raw mode swallows SIGINT).
pub fn is_quit(event: &Event, quit_key: char) -> bool {
    match event {
        Event::Key(KeyEvent { code: KeyCode::Char(c), modifiers, kind, .. })
            if *kind != KeyEventKind::Release =>
        {
            if modifiers.contains(KeyModifiers::CONTROL) {
                c.eq_ignore_ascii_case(&'c')
            } else {
                c.eq_ignore_ascii_case(&quit_key)
            }
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn quit_key_in_either_case() {
        assert!(is_quit(&key(KeyCode::Char('q'), KeyModifiers::NONE), 'q'));
        assert!(is_quit(&key(KeyCode::Char('Q'), KeyModifiers::SHIFT), 'q'));
    }

    #[test]
    fn ctrl_c_quits() {
        assert!(is_quit(&key(KeyCode::Char('c'), KeyModifiers::CONTROL), 'q'));
        assert!(!is_quit(&key(KeyCode::Char('c'), KeyModifiers::NONE), 'q'));
    }

    #[test]
    fn other_input_continues() {
        assert!(!is_quit(&key(KeyCode::Char('x'), KeyModifiers::NONE), 'q'));
        assert!(!is_quit(&key(KeyCode::Esc, KeyModifiers::NONE), 'q'));
        assert!(!is_quit(&key(KeyCode::Char('q'), KeyModifiers::CONTROL), 'q'));
        assert!(!is_quit(&Event::FocusGained, 'q'));
        assert!(!is_quit(&Event::Resize(80, 24), 'q'));
    }

    #[test]
    fn poll_keeps_quit_and_latest_size() {
        let mut poll = Poll::default();
        poll.absorb(&Event::Resize(100, 40), 'q');
        poll.absorb(&key(KeyCode::Char('x'), KeyModifiers::NONE), 'q');
        poll.absorb(&Event::Resize(60, 20), 'q');
        assert_eq!(poll, Poll { quit: false, resized: Some((60, 20)) });

        poll.absorb(&key(KeyCode::Char('q'), KeyModifiers::NONE), 'q');
        assert!(poll.quit);
    }

    #[test]
    fn key_release_is_ignored() {
        let release = Event::Key(KeyEvent::new_with_kind(
            KeyCode::Char('q'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
        ));
        assert!(!is_quit(&release, 'q'));
    }
}

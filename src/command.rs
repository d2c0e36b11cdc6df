use crate::game::{Difficulty, Direction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What the player asked for with a keypress
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Quit,
    Steer(Direction),
    TogglePause,
    SetDifficulty(Difficulty),
    CycleDifficulty,
    Restart,
}

impl Command {
    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Command> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        if (ev.modifiers, ev.code) == (KeyModifiers::CONTROL, KeyCode::Char('c')) {
            return Some(Command::Quit);
        }
        if !normal_modifiers.contains(ev.modifiers) {
            return None;
        }
        match ev.code {
            KeyCode::Char('w' | 'k') | KeyCode::Up => Some(Command::Steer(Direction::Up)),
            KeyCode::Char('s' | 'j') | KeyCode::Down => Some(Command::Steer(Direction::Down)),
            KeyCode::Char('a' | 'h') | KeyCode::Left => Some(Command::Steer(Direction::Left)),
            KeyCode::Char('d' | 'l') | KeyCode::Right => Some(Command::Steer(Direction::Right)),
            KeyCode::Char(' ' | 'p') => Some(Command::TogglePause),
            KeyCode::Char('1') => Some(Command::SetDifficulty(Difficulty::Easy)),
            KeyCode::Char('2') => Some(Command::SetDifficulty(Difficulty::Medium)),
            KeyCode::Char('3') => Some(Command::SetDifficulty(Difficulty::Hard)),
            KeyCode::Tab => Some(Command::CycleDifficulty),
            KeyCode::Enter | KeyCode::Char('r') => Some(Command::Restart),
            KeyCode::Char('q') => Some(Command::Quit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(KeyCode::Up, Some(Command::Steer(Direction::Up)))]
    #[case(KeyCode::Char('k'), Some(Command::Steer(Direction::Up)))]
    #[case(KeyCode::Char('s'), Some(Command::Steer(Direction::Down)))]
    #[case(KeyCode::Char('h'), Some(Command::Steer(Direction::Left)))]
    #[case(KeyCode::Right, Some(Command::Steer(Direction::Right)))]
    #[case(KeyCode::Char(' '), Some(Command::TogglePause))]
    #[case(KeyCode::Char('p'), Some(Command::TogglePause))]
    #[case(KeyCode::Char('1'), Some(Command::SetDifficulty(Difficulty::Easy)))]
    #[case(KeyCode::Char('2'), Some(Command::SetDifficulty(Difficulty::Medium)))]
    #[case(KeyCode::Char('3'), Some(Command::SetDifficulty(Difficulty::Hard)))]
    #[case(KeyCode::Tab, Some(Command::CycleDifficulty))]
    #[case(KeyCode::Enter, Some(Command::Restart))]
    #[case(KeyCode::Char('r'), Some(Command::Restart))]
    #[case(KeyCode::Char('q'), Some(Command::Quit))]
    #[case(KeyCode::Char('4'), None)]
    #[case(KeyCode::Esc, None)]
    fn plain_keys(#[case] code: KeyCode, #[case] cmd: Option<Command>) {
        assert_eq!(
            Command::from_key_event(KeyEvent::new(code, KeyModifiers::NONE)),
            cmd
        );
    }

    #[test]
    fn ctrl_c_quits() {
        let ev = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(Command::from_key_event(ev), Some(Command::Quit));
    }

    #[test]
    fn other_control_keys_ignored() {
        let ev = KeyEvent::new(KeyCode::Char('w'), KeyModifiers::CONTROL);
        assert_eq!(Command::from_key_event(ev), None);
    }
}

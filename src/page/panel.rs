use super::unlocks::Unlocks;
use crate::consts;
use crate::game::{Board, Difficulty, Engine, GameState};
use crate::util::{center_rect, EnumExt};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect, Size},
    text::{Line, Span},
    widgets::Widget,
};

/// The game column: difficulty selector, board, latest fun fact, and score
#[derive(Clone, Copy, Debug)]
pub(super) struct GamePanel<'a> {
    state: &'a GameState,
    board: Board<'a>,
    unlocks: &'a Unlocks,
}

impl<'a> GamePanel<'a> {
    pub(super) const WIDTH: u16 = Board::WIDTH + 2;

    const MESSAGE_LINES: u16 = 2;

    pub(super) fn new<R>(engine: &'a Engine<R>, unlocks: &'a Unlocks) -> GamePanel<'a> {
        GamePanel {
            state: engine.state(),
            board: Board::new(engine),
            unlocks,
        }
    }

    fn difficulty_selector(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for (i, d) in Difficulty::iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            let style = if d == self.state.difficulty {
                consts::SELECTED_STYLE
            } else {
                consts::DIM_STYLE
            };
            spans.push(Span::styled(format!(" {d} "), style));
        }
        Line::from(spans).centered()
    }

    fn score_line(&self) -> Line<'static> {
        let mut spans = vec![Span::styled(
            format!(" Score: {} ", self.state.score),
            consts::SCORE_STYLE,
        )];
        for entry in self.unlocks.entries() {
            let (symbol, style) = if self.state.score >= entry.threshold {
                (consts::UNLOCKED_SYMBOL, consts::UNLOCKED_STYLE)
            } else {
                (consts::LOCKED_SYMBOL, consts::LOCKED_STYLE)
            };
            spans.push(Span::raw("  "));
            spans.push(Span::styled(format!("{symbol} {}", entry.threshold), style));
        }
        Line::from(spans).centered()
    }
}

impl Widget for GamePanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [selector_area, hint_area, board_area, message_area, score_area] =
            Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(Board::HEIGHT),
                Constraint::Length(Self::MESSAGE_LINES),
                Constraint::Length(1),
            ])
            .areas(area);
        self.difficulty_selector().render(selector_area, buf);
        if self.state.difficulty == Difficulty::Hard {
            Line::styled(
                "2 points per apple, speed ramps up over time",
                consts::DIM_STYLE,
            )
            .centered()
            .render(hint_area, buf);
        }
        let board_area = center_rect(
            board_area,
            Size {
                width: Board::WIDTH,
                height: Board::HEIGHT,
            },
        );
        self.board.render(board_area, buf);
        if let (Some(msg), None) = (&self.state.message, self.state.game_over) {
            let opts = textwrap::Options::new(usize::from(Board::WIDTH)).break_words(true);
            for (line, row) in textwrap::wrap(msg, opts)
                .into_iter()
                .zip(message_area.rows())
            {
                Line::styled(line, consts::MESSAGE_STYLE)
                    .centered()
                    .render(row, buf);
            }
        }
        self.score_line().render(score_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Unlockable;
    use crate::game::Direction;
    use crate::page::tests::row;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    fn unlocks() -> Unlocks {
        Unlocks::new(vec![
            Unlockable::new(50, "first"),
            Unlockable::new(100, "second"),
        ])
    }

    fn render(engine: &Engine<ChaCha12Rng>, unlocks: &Unlocks) -> Buffer {
        let area = Rect::new(0, 0, GamePanel::WIDTH, 27);
        let mut buffer = Buffer::empty(area);
        GamePanel::new(engine, unlocks).render(area, &mut buffer);
        buffer
    }

    #[test]
    fn fresh_panel() {
        let engine = Engine::new_with_rng(Vec::new(), ChaCha12Rng::seed_from_u64(RNG_SEED));
        let buffer = render(&engine, &unlocks());
        assert_eq!(
            row(&buffer, 0),
            "            Easy   Medium   Hard            "
        );
        assert_eq!(
            row(&buffer, 1),
            "2 points per apple, speed ramps up over time"
        );
        assert_eq!(
            row(&buffer, 2),
            " ┌──────────────── Snake ─────────────────┐ "
        );
        assert_eq!(
            row(&buffer, 23),
            " └───────────── Space: play ──────────────┘ "
        );
        assert_eq!(row(&buffer, 24), " ".repeat(44));
        assert_eq!(
            row(&buffer, 26),
            "           Score: 0   ○ 50  ○ 100           "
        );
    }

    #[test]
    fn no_hint_below_hard() {
        let mut engine = Engine::new_with_rng(Vec::new(), ChaCha12Rng::seed_from_u64(RNG_SEED));
        engine.set_difficulty(Difficulty::Easy);
        let buffer = render(&engine, &unlocks());
        assert_eq!(row(&buffer, 1), " ".repeat(44));
    }

    #[test]
    fn message_and_badges_after_eating() {
        let mut engine = Engine::new_with_rng(
            vec![String::from("Owns three kettles")],
            ChaCha12Rng::seed_from_u64(RNG_SEED),
        );
        let mut unlocks = unlocks();
        engine.request_direction(Direction::Right);
        engine.set_paused(false);
        for _ in 0..5 {
            engine.tick();
        }
        assert_eq!(engine.score(), 2);
        let _ = unlocks.observe(60);
        let buffer = render(&engine, &unlocks);
        assert_eq!(
            row(&buffer, 24),
            "             Owns three kettles             "
        );
        assert_eq!(row(&buffer, 25), " ".repeat(44));
        assert_eq!(
            row(&buffer, 26),
            "           Score: 2   ○ 50  ○ 100           "
        );
    }

    #[test]
    fn badges_follow_current_score() {
        let engine = Engine::new_with_rng(Vec::new(), ChaCha12Rng::seed_from_u64(RNG_SEED));
        let unlocks = unlocks();
        let mut state = engine.state().clone();
        let area = Rect::new(0, 0, GamePanel::WIDTH, 27);
        for (score, expected) in [
            (49, "           Score: 49   ○ 50  ○ 100          "),
            (50, "           Score: 50   ● 50  ○ 100          "),
            (100, "          Score: 100   ● 50  ● 100          "),
        ] {
            state.score = score;
            let mut buffer = Buffer::empty(area);
            GamePanel {
                state: &state,
                board: Board::new(&engine),
                unlocks: &unlocks,
            }
            .render(area, &mut buffer);
            assert_eq!(row(&buffer, 26), expected);
        }
    }

    #[test]
    fn badges_go_dark_after_reset() {
        let mut engine = Engine::new_with_rng(Vec::new(), ChaCha12Rng::seed_from_u64(RNG_SEED));
        let mut unlocks = unlocks();
        let _ = unlocks.observe(120);
        engine.reset();
        let buffer = render(&engine, &unlocks);
        assert_eq!(
            row(&buffer, 26),
            "           Score: 0   ○ 50  ○ 100           "
        );
    }

    #[test]
    fn message_hidden_after_game_over() {
        let mut engine = Engine::new_with_rng(
            vec![String::from("Owns three kettles")],
            ChaCha12Rng::seed_from_u64(RNG_SEED),
        );
        engine.set_paused(false);
        for _ in 0..5 {
            engine.tick();
        }
        engine.request_direction(Direction::Up);
        for _ in 0..25 {
            engine.tick();
        }
        assert!(engine.state().game_over.is_some());
        assert!(engine.state().message.is_some());
        let buffer = render(&engine, &unlocks());
        assert_eq!(row(&buffer, 24), " ".repeat(44));
    }
}

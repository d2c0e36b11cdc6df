use super::{Direction, Engine, FoodKind, GameOver, GameState};
use crate::consts;
use crate::util::center_rect;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Position, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{
        block::{Block, Padding},
        Clear, Widget,
    },
};

/// A widget for drawing the playing field: the snake, the food, and, when
/// the game has ended, the game-over pop-up.
///
/// Every grid cell is drawn two terminal columns wide so that the field
/// comes out roughly square.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Board<'a> {
    state: &'a GameState,
}

impl<'a> Board<'a> {
    /// The width that should be used for the `Rect` passed to
    /// `Board::render()`
    pub(crate) const WIDTH: u16 = consts::GRID_SIZE * 2 + 2;

    /// The height that should be used for the `Rect` passed to
    /// `Board::render()`
    pub(crate) const HEIGHT: u16 = consts::GRID_SIZE + 2;

    pub(crate) fn new<R>(engine: &'a Engine<R>) -> Board<'a> {
        Board {
            state: engine.state(),
        }
    }

    fn head_symbol(&self) -> char {
        match self.state.snake.direction() {
            Direction::Up => consts::SNAKE_HEAD_UP_SYMBOL,
            Direction::Down => consts::SNAKE_HEAD_DOWN_SYMBOL,
            Direction::Left => consts::SNAKE_HEAD_LEFT_SYMBOL,
            Direction::Right => consts::SNAKE_HEAD_RIGHT_SYMBOL,
        }
    }
}

impl Widget for Board<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut block = Block::bordered()
            .border_style(consts::BOARD_BORDER_STYLE)
            .title(" Snake ")
            .title_alignment(Alignment::Center);
        if self.state.paused && self.state.game_over.is_none() {
            block = block.title_bottom(
                Line::from_iter([
                    Span::raw(" "),
                    Span::styled("Space", consts::KEY_STYLE),
                    Span::raw(": play "),
                ])
                .centered(),
            );
        }
        let level_area = block.inner(area);
        block.render(area, buf);
        let mut level = Canvas {
            area: level_area,
            buf,
        };
        for &pos in self.state.snake.body().iter().skip(1) {
            level.draw_cell(pos, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_STYLE);
        }
        if let Some(food) = self.state.food {
            match food.kind {
                FoodKind::Regular => {
                    level.draw_cell(
                        food.position,
                        consts::REGULAR_FOOD_SYMBOL,
                        consts::REGULAR_FOOD_STYLE,
                    );
                }
                FoodKind::Special => {
                    level.draw_cell(
                        food.position,
                        consts::SPECIAL_FOOD_SYMBOL,
                        consts::SPECIAL_FOOD_STYLE,
                    );
                }
            }
        }
        // Draw the head last so that, if it's a collision, we overwrite
        // whatever it's colliding with
        let head = self.state.snake.head();
        if matches!(
            self.state.game_over,
            Some(GameOver::Wall | GameOver::SelfCollision)
        ) {
            level.draw_cell(head, consts::COLLISION_SYMBOL, consts::COLLISION_STYLE);
        } else {
            level.draw_cell(head, self.head_symbol(), consts::SNAKE_STYLE);
        }
        if let Some(reason) = self.state.game_over {
            GameOverPopup {
                reason,
                score: self.state.score,
            }
            .render(area, buf);
        }
    }
}

#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_cell(&mut self, pos: Position, symbol: char, style: Style) {
        let Some(x) = pos
            .x
            .checked_mul(2)
            .and_then(|x| self.area.x.checked_add(x))
        else {
            return;
        };
        let Some(y) = self.area.y.checked_add(pos.y) else {
            return;
        };
        if !self.area.contains(Position::new(x, y)) {
            return;
        }
        if let Some(cell) = self.buf.cell_mut((x, y)) {
            cell.set_char(symbol);
            cell.set_style(Style::reset().patch(style));
        }
    }
}

/// Pop-up shown in the middle of the board once the game has ended
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct GameOverPopup {
    reason: GameOver,
    score: u32,
}

impl GameOverPopup {
    const WIDTH: u16 = 29;
    const HEIGHT: u16 = 5;
}

impl Widget for GameOverPopup {
    /*
     * ┌──────── GAME OVER ────────┐
     * │ Hit the wall              │
     * │ Final score: 12           │
     * │ Press Enter to play again │
     * └───────────────────────────┘
     */
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup_area = center_rect(
            area,
            Size {
                width: Self::WIDTH,
                height: Self::HEIGHT,
            },
        );
        let block = Block::bordered()
            .title(" GAME OVER ")
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1))
            .style(Style::reset());
        let inner = block.inner(popup_area);
        Clear.render(popup_area, buf);
        block.render(popup_area, buf);
        let reason = match self.reason {
            GameOver::Wall => "Hit the wall",
            GameOver::SelfCollision => "Bit your own tail",
            GameOver::BoardFull => "No room left. You win!",
        };
        let lines = [
            Line::from(reason),
            Line::from(format!("Final score: {}", self.score)),
            Line::from_iter([
                Span::raw("Press "),
                Span::styled("Enter", consts::KEY_STYLE),
                Span::raw(" to play again"),
            ]),
        ];
        for (line, row) in lines.into_iter().zip(inner.rows()) {
            line.render(row, buf);
        }
    }
}

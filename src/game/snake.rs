use super::direction::Direction;
use super::grid::Bounds;
use crate::consts;
use ratatui::layout::Position;
use std::collections::VecDeque;

/// The snake: where it is and which way it is going
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    /// The cells of the snake, head first and tail last
    pub(super) body: VecDeque<Position>,

    /// The direction in which the snake will move on the next tick
    pub(super) direction: Direction,
}

impl Snake {
    /// Create the starting snake: [`INITIAL_SNAKE_LENGTH`] cells with the
    /// head in the center of `bounds`, stretched out behind it and facing
    /// right.
    ///
    /// [`INITIAL_SNAKE_LENGTH`]: consts::INITIAL_SNAKE_LENGTH
    pub(super) fn new(bounds: Bounds) -> Snake {
        let head = bounds.center();
        let body = std::iter::successors(Some(head), |&p| Direction::Left.advance(p, bounds))
            .take(consts::INITIAL_SNAKE_LENGTH)
            .collect();
        Snake {
            body,
            direction: Direction::Right,
        }
    }

    pub(crate) fn head(&self) -> Position {
        self.body[0]
    }

    pub(crate) fn body(&self) -> &VecDeque<Position> {
        &self.body
    }

    pub(crate) fn len(&self) -> usize {
        self.body.len()
    }

    pub(crate) fn direction(&self) -> Direction {
        self.direction
    }

    pub(super) fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Ask the snake to turn towards `requested` before its next move.  The
    /// request is refused only if it points straight back along the
    /// direction already chosen.  Returns whether the request was granted.
    pub(super) fn turn(&mut self, requested: Direction) -> bool {
        self.direction = self.direction.request(requested);
        self.direction == requested
    }

    /// Return the cell the head will move to on the next tick, or `None` if
    /// that would leave `bounds`
    pub(super) fn next_head(&self, bounds: Bounds) -> Option<Position> {
        self.direction.advance(self.head(), bounds)
    }

    /// Move the head to `head`.  If `grow` is false, the tail cell is dropped
    /// so that the length stays the same.
    pub(super) fn slither(&mut self, head: Position, grow: bool) {
        self.body.push_front(head);
        if !grow {
            let _ = self.body.pop_back();
        }
    }
}

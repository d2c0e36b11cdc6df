use ratatui::layout::{Position, Positions, Rect, Size};

/// The extent of the playing field.  Every cell the snake or the food may
/// occupy lies in `[0, width) × [0, height)`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Bounds {
    pub(crate) width: u16,
    pub(crate) height: u16,
}

impl Bounds {
    /// A `side × side` grid
    pub(crate) const fn square(side: u16) -> Bounds {
        Bounds {
            width: side,
            height: side,
        }
    }

    pub(crate) fn size(self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    pub(crate) fn center(self) -> Position {
        Position::new(self.width / 2, self.height / 2)
    }

    pub(crate) fn contains(self, pos: Position) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    /// Iterate over every cell in the grid, row by row
    pub(crate) fn positions(self) -> Positions {
        Rect::from((Position::ORIGIN, self.size())).positions()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_grid() {
        let bounds = Bounds::square(20);
        assert_eq!(bounds.center(), Position::new(10, 10));
        assert_eq!(bounds.positions().count(), 400);
        assert!(bounds.contains(Position::new(19, 19)));
        assert!(!bounds.contains(Position::new(20, 3)));
        assert!(!bounds.contains(Position::new(3, 20)));
    }
}

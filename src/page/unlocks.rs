use crate::config::Unlockable;
use crate::consts;
use log::info;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{
        block::{Block, Padding},
        Widget,
    },
};

/// Tracks which pieces of bonus text the player has unlocked by reaching
/// score thresholds.  Unlocks persist across game resets for the life of
/// the page.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Unlocks {
    /// All unlockables, in ascending order of threshold
    entries: Vec<Unlockable>,

    /// Indices into `entries` of the unlocked items, in the order they were
    /// unlocked
    unlocked: Vec<usize>,
}

impl Unlocks {
    pub(crate) fn new(mut entries: Vec<Unlockable>) -> Unlocks {
        entries.sort_by_key(|u| u.threshold);
        Unlocks {
            entries,
            unlocked: Vec::new(),
        }
    }

    /// Note that the score is now `score`.  Every entry whose threshold has
    /// been reached and that was not already unlocked becomes unlocked.
    /// Returns the indices of the newly-unlocked entries.
    pub(crate) fn observe(&mut self, score: u32) -> Vec<usize> {
        let fresh = self
            .entries
            .iter()
            .enumerate()
            .filter(|&(i, u)| u.threshold <= score && !self.unlocked.contains(&i))
            .map(|(i, _)| i)
            .collect::<Vec<_>>();
        for &i in &fresh {
            info!(
                "Unlocked entry at {} points with a score of {score}",
                self.entries[i].threshold
            );
        }
        self.unlocked.extend(fresh.iter().copied());
        fresh
    }

    pub(crate) fn entries(&self) -> &[Unlockable] {
        &self.entries
    }

    pub(crate) fn get(&self, index: usize) -> Option<&Unlockable> {
        self.entries.get(index)
    }

    pub(crate) fn is_unlocked(&self, index: usize) -> bool {
        self.unlocked.contains(&index)
    }

    /// The unlocked entries, in the order they were unlocked
    pub(crate) fn unlocked(&self) -> impl Iterator<Item = &Unlockable> + '_ {
        self.unlocked.iter().filter_map(|&i| self.entries.get(i))
    }
}

/// The list of unlockables shown beside the game, with unreached entries
/// hidden behind their thresholds
#[derive(Clone, Copy, Debug)]
pub(super) struct UnlockList<'a> {
    pub(super) unlocks: &'a Unlocks,
}

impl UnlockList<'_> {
    /// Width of the "● 100  " marker before each entry's text
    const MARKER_WIDTH: u16 = 7;
}

impl Widget for UnlockList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(Span::styled(" Unlockables ", consts::HEADING_STYLE))
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        block.render(area, buf);
        let text_width = inner.width.saturating_sub(Self::MARKER_WIDTH).max(1);
        let opts = textwrap::Options::new(usize::from(text_width)).break_words(true);
        let mut lines = Vec::new();
        for (i, entry) in self.unlocks.entries().iter().enumerate() {
            let (symbol, style, text) = if self.unlocks.is_unlocked(i) {
                (
                    consts::UNLOCKED_SYMBOL,
                    consts::UNLOCKED_STYLE,
                    entry.text.clone(),
                )
            } else {
                (
                    consts::LOCKED_SYMBOL,
                    consts::LOCKED_STYLE,
                    format!("Reach {} points to unlock", entry.threshold),
                )
            };
            for (j, chunk) in textwrap::wrap(&text, &opts).into_iter().enumerate() {
                let marker = if j == 0 {
                    format!("{symbol} {:>3}  ", entry.threshold)
                } else {
                    " ".repeat(usize::from(Self::MARKER_WIDTH))
                };
                lines.push(Line::from_iter([
                    Span::styled(marker, style),
                    Span::styled(chunk.into_owned(), style),
                ]));
            }
        }
        for (line, row) in lines.into_iter().zip(inner.rows()) {
            line.render(row, buf);
        }
    }
}

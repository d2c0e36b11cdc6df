use crate::config::{Profile, Unlockable};
use crate::consts;
use crate::util::center_rect;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{
        block::{Block, Padding},
        Clear, Widget,
    },
};

/// The banner across the top of the page
#[derive(Clone, Copy, Debug)]
pub(super) struct Header<'a> {
    pub(super) profile: &'a Profile,
}

impl Header<'_> {
    pub(super) const HEIGHT: u16 = 2;
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, consts::TITLE_STYLE);
        let mut rows = area.rows();
        if let Some(row) = rows.next() {
            Line::from(format!("{}'s Green World", self.profile.name))
                .centered()
                .render(row, buf);
        }
        if let Some(row) = rows.next() {
            Line::from(format!(
                "A gift for {}'s {} birthday",
                self.profile.name,
                ordinal(self.profile.age)
            ))
            .centered()
            .render(row, buf);
        }
    }
}

/// Format `n` as an English ordinal ("1st", "2nd", "11th", ...)
fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

/// The signed birthday wish at the bottom of the page
#[derive(Clone, Copy, Debug)]
pub(super) struct BottomGreeting<'a> {
    pub(super) profile: &'a Profile,
}

impl BottomGreeting<'_> {
    pub(super) const HEIGHT: u16 = 6;
}

impl Widget for BottomGreeting<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(Span::styled(
                format!(" A birthday wish for {} ", self.profile.name),
                consts::HEADING_STYLE,
            ))
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        block.render(area, buf);
        let wish_rows = usize::from(inner.height.saturating_sub(2));
        let opts = textwrap::Options::new(usize::from(inner.width)).break_words(true);
        for (line, row) in textwrap::wrap(&self.profile.wish, opts)
            .into_iter()
            .take(wish_rows)
            .zip(inner.rows())
        {
            Line::from(line).centered().render(row, buf);
        }
        if let Some(row) = inner.rows().last() {
            Line::from_iter([
                Span::styled(self.profile.signed_by.as_str(), consts::LABEL_STYLE),
                Span::styled(format!(" · {}", self.profile.date), consts::DIM_STYLE),
            ])
            .right_aligned()
            .render(row, buf);
        }
    }
}

/// One-line summary of the controls
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct KeyHelp;

impl Widget for KeyHelp {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Line::from_iter([
            Span::styled("←↓↑→", consts::KEY_STYLE),
            Span::raw("/"),
            Span::styled("wasd", consts::KEY_STYLE),
            Span::raw(": steer  "),
            Span::styled("Space", consts::KEY_STYLE),
            Span::raw(": pause  "),
            Span::styled("1 2 3", consts::KEY_STYLE),
            Span::raw("/"),
            Span::styled("Tab", consts::KEY_STYLE),
            Span::raw(": difficulty  "),
            Span::styled("r", consts::KEY_STYLE),
            Span::raw(": restart  "),
            Span::styled("q", consts::KEY_STYLE),
            Span::raw(": quit"),
        ])
        .centered()
        .render(area, buf);
    }
}

/// Pop-up shown for a few seconds over the middle of the page
#[derive(Clone, Copy, Debug)]
pub(crate) enum Celebration<'a> {
    /// A piece of content has just been unlocked
    Unlock(&'a Unlockable),

    /// The page was opened on the birthday itself
    Birthday(&'a Profile),
}

impl<'a> Celebration<'a> {
    const WIDTH: u16 = 60;
    const TEXT_WIDTH: u16 = Self::WIDTH - 4;
    const MAX_TEXT_LINES: usize = 3;

    fn title(self) -> String {
        match self {
            Celebration::Unlock(unlockable) => format!(" {} points ", unlockable.threshold),
            Celebration::Birthday(profile) => format!(" {} ", profile.birth_date),
        }
    }

    fn headline(self) -> String {
        match self {
            Celebration::Unlock(_) => String::from("Congratulations, you unlocked something new!"),
            Celebration::Birthday(profile) => format!("Happy birthday, {}!", profile.name),
        }
    }

    fn text(self) -> &'a str {
        match self {
            Celebration::Unlock(unlockable) => &unlockable.text,
            Celebration::Birthday(profile) => &profile.wish,
        }
    }
}

impl Widget for Celebration<'_> {
    // `area` is here the area of the entire display in which the program is
    // drawing, not the area for just the widget proper.
    fn render(self, area: Rect, buf: &mut Buffer) {
        let opts = textwrap::Options::new(usize::from(Self::TEXT_WIDTH)).break_words(true);
        let mut text = textwrap::wrap(self.text(), opts);
        text.truncate(Self::MAX_TEXT_LINES);
        let height = u16::try_from(text.len())
            .unwrap_or(u16::MAX)
            .saturating_add(4);
        let popup_area = center_rect(
            area,
            Size {
                width: Self::WIDTH,
                height,
            },
        );
        let block = Block::bordered()
            .title(self.title())
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1))
            .style(Style::reset());
        let inner = block.inner(popup_area);
        Clear.render(popup_area, buf);
        block.render(popup_area, buf);
        let mut rows = inner.rows();
        if let Some(row) = rows.next() {
            Line::styled(self.headline(), consts::CELEBRATION_STYLE)
                .centered()
                .render(row, buf);
        }
        let _ = rows.next();
        for (line, row) in text.into_iter().zip(rows) {
            Line::styled(line, consts::UNLOCKED_STYLE)
                .centered()
                .render(row, buf);
        }
    }
}

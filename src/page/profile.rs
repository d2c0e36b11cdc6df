use crate::config::{Profile, TimelineEntry};
use crate::consts;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        block::{Block, Padding},
        Widget,
    },
};

/// The card listing facts about the person the page is for
#[derive(Clone, Copy, Debug)]
pub(super) struct ProfileCard<'a> {
    pub(super) profile: &'a Profile,
}

impl ProfileCard<'_> {
    /// The height that should be used for the `Rect` passed to
    /// `ProfileCard::render()`
    pub(super) const HEIGHT: u16 = 9;
}

impl Widget for ProfileCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(Span::styled(" Profile ", consts::HEADING_STYLE))
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        block.render(area, buf);
        let p = self.profile;
        let mut personality = vec![label("Personality: ")];
        for (i, trait_) in p.personality.iter().enumerate() {
            if i > 0 {
                personality.push(Span::raw(" "));
            }
            personality.push(Span::styled(format!(" {trait_} "), consts::TAG_STYLE));
        }
        let lines = [
            Line::styled(p.full_name.as_str(), consts::HEADING_STYLE).centered(),
            Line::styled(p.zodiac.as_str(), consts::DIM_STYLE).centered(),
            Line::from_iter([label("Birthday: "), Span::raw(p.birth_date.as_str())]),
            Line::from_iter([label("Age: "), Span::raw(p.age.to_string())]),
            Line::from(personality),
            Line::from_iter([label("Interests: "), Span::raw(p.interests.join(", "))]),
            Line::from_iter([
                label("Motto: "),
                Span::styled(
                    format!("\u{201C}{}\u{201D}", p.motto),
                    Style::new().add_modifier(Modifier::ITALIC),
                ),
            ]),
        ];
        for (line, row) in lines.into_iter().zip(inner.rows()) {
            line.render(row, buf);
        }
    }
}

fn label(s: &str) -> Span<'_> {
    Span::styled(s, consts::LABEL_STYLE)
}

/// The list of milestones in the person's life
#[derive(Clone, Copy, Debug)]
pub(super) struct Timeline<'a> {
    pub(super) entries: &'a [TimelineEntry],
}

impl Timeline<'_> {
    /// The height needed to show every entry
    pub(super) fn height(&self) -> u16 {
        u16::try_from(self.entries.len())
            .unwrap_or(u16::MAX)
            .saturating_add(2)
    }
}

impl Widget for Timeline<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(Span::styled(" Timeline ", consts::HEADING_STYLE))
            .title_alignment(Alignment::Left)
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        block.render(area, buf);
        for (entry, row) in self.entries.iter().zip(inner.rows()) {
            Line::from_iter([
                Span::styled(format!("{:>4}", entry.year), consts::HEADING_STYLE),
                Span::styled(" ┃ ", consts::DIM_STYLE),
                Span::raw(entry.event.as_str()),
            ])
            .render(row, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::tests::row;

    #[test]
    fn render_profile_card() {
        let profile = Profile::default();
        let area = Rect::new(0, 0, 56, ProfileCard::HEIGHT);
        let mut buffer = Buffer::empty(area);
        ProfileCard {
            profile: &profile,
        }
        .render(area, &mut buffer);
        let rows = (0..area.height).map(|y| row(&buffer, y)).collect::<Vec<_>>();
        assert_eq!(
            rows,
            [
                "┌ Profile ─────────────────────────────────────────────┐",
                "│                      Sugar Tube                      │",
                "│                        Pisces                        │",
                "│ Birthday: March 18                                   │",
                "│ Age: 18                                              │",
                "│ Personality:  lively   kind   creative   funny   car │",
                "│ Interests: chatting, tabletop games, original charac │",
                "│ Motto: \u{201C}Happiness is enough\u{201D}                         │",
                "└──────────────────────────────────────────────────────┘",
            ]
        );
    }

    #[test]
    fn render_timeline() {
        let entries = [
            TimelineEntry {
                year: 2023,
                event: String::from("First campaign"),
            },
            TimelineEntry {
                year: 987,
                event: String::from("Founded a city"),
            },
        ];
        let timeline = Timeline { entries: &entries };
        assert_eq!(timeline.height(), 4);
        let area = Rect::new(0, 0, 30, timeline.height());
        let mut buffer = Buffer::empty(area);
        timeline.render(area, &mut buffer);
        let rows = (0..area.height).map(|y| row(&buffer, y)).collect::<Vec<_>>();
        assert_eq!(
            rows,
            [
                "┌ Timeline ──────────────────┐",
                "│ 2023 ┃ First campaign      │",
                "│  987 ┃ Founded a city      │",
                "└────────────────────────────┘",
            ]
        );
    }
}

mod greeting;
mod panel;
mod profile;
mod unlocks;
pub(crate) use self::greeting::Celebration;
use self::greeting::{BottomGreeting, Header, KeyHelp};
use self::panel::GamePanel;
use self::profile::{ProfileCard, Timeline};
use self::unlocks::UnlockList;
pub(crate) use self::unlocks::Unlocks;
use crate::config::Profile;
use crate::game::Engine;
use crate::util::get_display_area;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::Widget,
};

/// The whole greeting page, laid out in a fixed-size area in the middle of
/// the terminal:
///
/// ```text
/// ┌──────────────────────── header ────────────────────────┐
/// │ profile card                 │ difficulty / board /    │
/// │ timeline                     │ fun fact / score        │
/// │ unlockables                  │                         │
/// ├──────────────────── birthday wish ─────────────────────┤
/// └──────────────────────── key help ──────────────────────┘
/// ```
#[derive(Clone, Copy, Debug)]
pub(crate) struct Page<'a> {
    profile: &'a Profile,
    panel: GamePanel<'a>,
    unlocks: &'a Unlocks,
    celebration: Option<Celebration<'a>>,
}

impl<'a> Page<'a> {
    pub(crate) fn new<R>(
        profile: &'a Profile,
        engine: &'a Engine<R>,
        unlocks: &'a Unlocks,
        celebration: Option<Celebration<'a>>,
    ) -> Page<'a> {
        Page {
            profile,
            panel: GamePanel::new(engine, unlocks),
            unlocks,
            celebration,
        }
    }
}

impl Widget for Page<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [header_area, main_area, greeting_area, help_area] = Layout::vertical([
            Constraint::Length(Header::HEIGHT),
            Constraint::Fill(1),
            Constraint::Length(BottomGreeting::HEIGHT),
            Constraint::Length(1),
        ])
        .areas(display);
        Header {
            profile: self.profile,
        }
        .render(header_area, buf);
        let [left_area, panel_area] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(GamePanel::WIDTH)])
                .spacing(1)
                .areas(main_area);
        let timeline = Timeline {
            entries: &self.profile.timeline,
        };
        let [card_area, timeline_area, unlocks_area] = Layout::vertical([
            Constraint::Length(ProfileCard::HEIGHT),
            Constraint::Length(timeline.height()),
            Constraint::Fill(1),
        ])
        .areas(left_area);
        ProfileCard {
            profile: self.profile,
        }
        .render(card_area, buf);
        timeline.render(timeline_area, buf);
        UnlockList {
            unlocks: self.unlocks,
        }
        .render(unlocks_area, buf);
        self.panel.render(panel_area, buf);
        BottomGreeting {
            profile: self.profile,
        }
        .render(greeting_area, buf);
        KeyHelp.render(help_area, buf);
        if let Some(celebration) = self.celebration {
            celebration.render(display, buf);
        }
    }
}

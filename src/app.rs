use crate::command::Command;
use crate::config::Profile;
use crate::consts;
use crate::game::{Difficulty, Engine, GameEvent};
use crate::page::{Celebration, Page, Unlocks};
use crate::schedule::{Scheduler, Timer};
use crate::util::EnumExt;
use chrono::{Local, NaiveDate};
use crossterm::event::{poll, read, Event};
use log::{debug, info};
use rand::Rng;
use ratatui::{backend::Backend, Frame, Terminal};
use std::io;
use std::time::{Duration, Instant};

/// The page as a whole: the game engine plus everything around it
#[derive(Clone, Debug)]
pub(crate) struct App<R = rand::rngs::ThreadRng> {
    engine: Engine<R>,
    profile: Profile,
    unlocks: Unlocks,
    scheduler: Scheduler,

    /// What the pop-up currently on display is celebrating
    celebration: Option<Celebrating>,

    /// The difficulty the periodic timers were last started for, or `None`
    /// if they are stopped
    timers_for: Option<Difficulty>,

    quitting: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Celebrating {
    /// A newly unlocked entry, by index into the app's `unlocks`
    Unlock(usize),
    Birthday,
}

impl App {
    pub(crate) fn new(profile: Profile) -> App {
        App::new_with_rng(profile, rand::rng())
    }
}

impl<R: Rng> App<R> {
    pub(crate) fn new_with_rng(profile: Profile, rng: R) -> App<R> {
        let engine = Engine::new_with_rng(profile.fun_facts.clone(), rng);
        let unlocks = Unlocks::new(profile.unlockables.clone());
        App {
            engine,
            profile,
            unlocks,
            scheduler: Scheduler::new(),
            celebration: None,
            timers_for: None,
            quitting: false,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        info!("Opening greeting page for {}", self.profile.name);
        self.greet_birthday(Local::now().date_naive(), Instant::now());
        while !self.quitting {
            terminal.draw(|frame| self.draw(frame))?;
            let ready = match self.time_to_next(Instant::now()) {
                Some(wait) => poll(wait)?,
                None => true,
            };
            if ready {
                self.handle_event(read()?, Instant::now());
            }
            self.fire_due(Instant::now());
        }
        info!("Closing page with score {}", self.engine.score());
        Ok(())
    }

    /// Bring up the birthday pop-up if `today` is the birthday
    fn greet_birthday(&mut self, today: NaiveDate, now: Instant) {
        if self.profile.birthday.falls_on(today) {
            info!("Today is {}'s birthday", self.profile.name);
            self.celebrate(Celebrating::Birthday, now);
        }
    }

    fn celebrate(&mut self, what: Celebrating, now: Instant) {
        self.celebration = Some(what);
        self.scheduler
            .schedule(Timer::EndCelebration, now + consts::CELEBRATION_DURATION);
    }

    fn handle_event(&mut self, event: Event, now: Instant) {
        if event == Event::FocusLost {
            debug!("Focus lost; pausing");
            self.engine.set_paused(true);
        } else if let Some(cmd) = event.as_key_press_event().and_then(Command::from_key_event) {
            self.handle_command(cmd);
        }
        self.settle(now);
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::Quit => self.quitting = true,
            Command::Steer(direction) => self.engine.request_direction(direction),
            Command::TogglePause => self.engine.toggle_pause(),
            Command::SetDifficulty(difficulty) => self.engine.set_difficulty(difficulty),
            Command::CycleDifficulty => self
                .engine
                .set_difficulty(self.engine.difficulty().cycle_next()),
            Command::Restart => {
                if self.engine.state().game_over.is_some() {
                    self.engine.reset();
                }
            }
        }
    }

    /// Fire every timer that has come due as of `now`
    fn fire_due(&mut self, now: Instant) {
        while let Some((timer, deadline)) = self.scheduler.pop_due(now) {
            match timer {
                Timer::Tick => {
                    self.engine.tick();
                    if self.engine.running() {
                        self.scheduler
                            .schedule(Timer::Tick, now + self.engine.tick_interval());
                    }
                }
                Timer::TimeStep => {
                    self.engine.advance_clock(consts::TIME_STEP);
                    self.scheduler
                        .schedule(Timer::TimeStep, deadline + consts::TIME_STEP);
                }
                Timer::ClearMessage => self.engine.clear_message(),
                Timer::EndCelebration => self.celebration = None,
            }
            self.settle(now);
        }
    }

    /// Process the engine's queued events, then bring the periodic timers in
    /// line with whether the game is running and at what difficulty
    fn settle(&mut self, now: Instant) {
        for ev in self.engine.drain_events() {
            self.apply_event(ev, now);
        }
        let want = self.engine.running().then(|| self.engine.difficulty());
        if want != self.timers_for {
            if want.is_some() {
                self.scheduler
                    .start_periodic(now, self.engine.tick_interval());
            } else {
                self.scheduler.stop_periodic();
            }
            self.timers_for = want;
        }
    }

    fn apply_event(&mut self, ev: GameEvent, now: Instant) {
        match ev {
            GameEvent::ScoreChanged(score) => {
                if let Some(&latest) = self.unlocks.observe(score).last() {
                    info!(
                        "{} of {} unlockables revealed",
                        self.unlocks.unlocked().count(),
                        self.unlocks.entries().len()
                    );
                    self.celebrate(Celebrating::Unlock(latest), now);
                }
            }
            GameEvent::MessageSet(_) => self
                .scheduler
                .schedule(Timer::ClearMessage, now + consts::MESSAGE_DURATION),
            GameEvent::MessageCleared => self.scheduler.cancel(Timer::ClearMessage),
            GameEvent::FoodRespawned(_) | GameEvent::GameOver(_) => (),
        }
    }
}

impl<R> App<R> {
    fn draw(&self, frame: &mut Frame<'_>) {
        let celebration = self.celebration.and_then(|c| match c {
            Celebrating::Unlock(i) => self.unlocks.get(i).map(Celebration::Unlock),
            Celebrating::Birthday => Some(Celebration::Birthday(&self.profile)),
        });
        frame.render_widget(
            Page::new(&self.profile, &self.engine, &self.unlocks, celebration),
            frame.area(),
        );
    }

    /// How long until the next timer fires, if any is pending
    fn time_to_next(&self, now: Instant) -> Option<Duration> {
        self.scheduler
            .next_deadline()
            .map(|d| d.saturating_duration_since(now))
    }
}

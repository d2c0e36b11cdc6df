mod board;
mod difficulty;
mod direction;
mod food;
mod grid;
mod snake;
pub(crate) use self::board::Board;
pub(crate) use self::difficulty::Difficulty;
pub(crate) use self::direction::Direction;
pub(crate) use self::food::{Food, FoodKind};
pub(crate) use self::grid::Bounds;
use self::snake::Snake;
use crate::consts;
use log::{debug, info, warn};
use rand::{seq::IndexedRandom, Rng};
use ratatui::layout::Position;
use std::collections::{HashSet, VecDeque};
use std::time::Duration;

/// Something that happened inside the engine that the host may want to react
/// to.  Events are queued as they occur and handed out by
/// [`Engine::drain_events()`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum GameEvent {
    /// The score changed to the given value
    ScoreChanged(u32),

    /// A fun fact should be shown until a [`GameEvent::MessageCleared`]
    MessageSet(String),

    MessageCleared,

    /// New food was placed after the old food was eaten
    FoodRespawned(Food),

    GameOver(GameOver),
}

/// Why a game ended
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum GameOver {
    /// The snake ran into the edge of the grid
    Wall,

    /// The snake ran into itself
    SelfCollision,

    /// The snake filled the grid, leaving nowhere to put food
    BoardFull,
}

/// Everything about a game in progress
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct GameState {
    pub(crate) snake: Snake,
    pub(crate) food: Option<Food>,
    pub(crate) score: u32,
    pub(crate) difficulty: Difficulty,
    /// Play time accumulated while the game was running
    pub(crate) elapsed: Duration,
    pub(crate) paused: bool,
    pub(crate) game_over: Option<GameOver>,
    /// Fun fact currently on display
    pub(crate) message: Option<String>,
}

impl GameState {
    /// The state of a freshly-opened game: the starting snake facing right,
    /// paused on [`Difficulty::Hard`], with food at
    /// [`INITIAL_FOOD_POSITION`][consts::INITIAL_FOOD_POSITION]
    fn new(bounds: Bounds) -> GameState {
        GameState {
            snake: Snake::new(bounds),
            food: Some(Food::new(consts::INITIAL_FOOD_POSITION, FoodKind::Regular)),
            score: 0,
            difficulty: Difficulty::default(),
            elapsed: Duration::ZERO,
            paused: true,
            game_over: None,
            message: None,
        }
    }

    pub(crate) fn running(&self) -> bool {
        !self.paused && self.game_over.is_none()
    }
}

/// The snake game simulation.
///
/// The engine owns its [`GameState`]; the host reads it through
/// [`Engine::state()`] and learns about changes by draining the event queue
/// after each call.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Engine<R = rand::rngs::ThreadRng> {
    rng: R,
    bounds: Bounds,
    state: GameState,
    fun_facts: Vec<String>,
    events: VecDeque<GameEvent>,
}

impl<R: Rng> Engine<R> {
    pub(crate) fn new_with_rng(fun_facts: Vec<String>, rng: R) -> Engine<R> {
        let bounds = Bounds::square(consts::GRID_SIZE);
        Engine {
            rng,
            bounds,
            state: GameState::new(bounds),
            fun_facts,
            events: VecDeque::new(),
        }
    }

    /// Advance the simulation by one step.  Does nothing while paused or
    /// after the game has ended.
    pub(crate) fn tick(&mut self) {
        if !self.state.running() {
            return;
        }
        let Some(head) = self.state.snake.next_head(self.bounds) else {
            self.end(GameOver::Wall);
            return;
        };
        // The tail still counts even though it would move out of the way
        // this tick.
        if self.state.snake.occupies(head) {
            self.end(GameOver::SelfCollision);
            return;
        }
        match self.state.food {
            Some(food) if food.position == head => {
                self.state.snake.slither(head, true);
                self.eat(food);
            }
            _ => self.state.snake.slither(head, false),
        }
    }

    fn eat(&mut self, food: Food) {
        let points = food.points(self.state.difficulty);
        self.state.score = self.state.score.saturating_add(points);
        debug!(
            "Ate {:?} food at ({}, {}) for {points} points; score is now {}, length {}",
            food.kind,
            food.position.x,
            food.position.y,
            self.state.score,
            self.state.snake.len()
        );
        self.events
            .push_back(GameEvent::ScoreChanged(self.state.score));
        if let Some(fact) = self.fun_facts.choose(&mut self.rng) {
            self.state.message = Some(fact.clone());
            self.events.push_back(GameEvent::MessageSet(fact.clone()));
        }
        let occupied = self.occupied();
        self.state.food = Food::spawn(self.bounds, &occupied, &mut self.rng);
        match self.state.food {
            Some(food) => self.events.push_back(GameEvent::FoodRespawned(food)),
            None => {
                warn!("No free cells left for food");
                self.end(GameOver::BoardFull);
            }
        }
    }

    fn occupied(&self) -> HashSet<Position> {
        self.state.snake.body().iter().copied().collect()
    }

    fn end(&mut self, reason: GameOver) {
        info!(
            "Game over ({reason:?}) with score {} after {:?}",
            self.state.score, self.state.elapsed
        );
        self.state.game_over = Some(reason);
        self.events.push_back(GameEvent::GameOver(reason));
    }

    /// Return the game to its starting configuration with the score at zero,
    /// the difficulty back on [`Difficulty::Hard`], paused, and with food at
    /// a random free cell
    pub(crate) fn reset(&mut self) {
        info!("Resetting game");
        let mut state = GameState::new(self.bounds);
        let occupied = state.snake.body().iter().copied().collect();
        state.food = Food::spawn(self.bounds, &occupied, &mut self.rng);
        let had_message = self.state.message.is_some();
        self.state = state;
        if had_message {
            self.events.push_back(GameEvent::MessageCleared);
        }
        self.events.push_back(GameEvent::ScoreChanged(0));
    }
}

impl<R> Engine<R> {
    pub(crate) fn state(&self) -> &GameState {
        &self.state
    }

    pub(crate) fn score(&self) -> u32 {
        self.state.score
    }

    pub(crate) fn running(&self) -> bool {
        self.state.running()
    }

    pub(crate) fn difficulty(&self) -> Difficulty {
        self.state.difficulty
    }

    /// The time that should pass before the next tick
    pub(crate) fn tick_interval(&self) -> Duration {
        self.state.difficulty.tick_interval(self.state.elapsed)
    }

    /// Ask the snake to turn.  Requests to reverse are ignored.
    pub(crate) fn request_direction(&mut self, direction: Direction) {
        if self.state.game_over.is_none() && !self.state.snake.turn(direction) {
            debug!("Ignoring request to turn {direction:?}");
        }
    }

    pub(crate) fn set_difficulty(&mut self, difficulty: Difficulty) {
        if self.state.difficulty != difficulty {
            debug!("Difficulty set to {difficulty}");
            self.state.difficulty = difficulty;
        }
    }

    pub(crate) fn set_paused(&mut self, paused: bool) {
        if self.state.game_over.is_none() {
            self.state.paused = paused;
        }
    }

    pub(crate) fn toggle_pause(&mut self) {
        self.set_paused(!self.state.paused);
    }

    /// Add `dt` to the play time.  Only time spent running counts.
    pub(crate) fn advance_clock(&mut self, dt: Duration) {
        if self.state.running() {
            self.state.elapsed = self.state.elapsed.saturating_add(dt);
        }
    }

    /// Take down the current fun fact, if any
    pub(crate) fn clear_message(&mut self) {
        if self.state.message.take().is_some() {
            self.events.push_back(GameEvent::MessageCleared);
        }
    }

    /// Remove and return all events queued since the last call
    pub(crate) fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain(..).collect()
    }
}

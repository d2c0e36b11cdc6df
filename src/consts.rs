//! Assorted constants & hard-coded configuration
use ratatui::{
    layout::{Position, Size},
    style::{Color, Modifier, Style},
};
use std::time::Duration;

/// Side length of the square playing field, in cells
pub(crate) const GRID_SIZE: u16 = 20;

/// Reference time between movements of the snake.  Each difficulty scales
/// this; see [`crate::game::Difficulty::base_interval()`].
pub(crate) const BASE_TICK_INTERVAL: Duration = Duration::from_millis(150);

/// How often play time is accumulated while the game is running
pub(crate) const TIME_STEP: Duration = Duration::from_millis(100);

/// Play time over which the speed-up on Hard difficulty is measured: after
/// `t` of play, the tick interval has shrunk by `t / HARD_RAMP_PERIOD` of the
/// base interval.
pub(crate) const HARD_RAMP_PERIOD: Duration = Duration::from_secs(120);

/// The most the Hard tick interval can shrink, as a percentage of its base
pub(crate) const HARD_RAMP_MAX_PERCENT: u128 = 40;

/// How long a fun fact stays on screen after the snake eats
pub(crate) const MESSAGE_DURATION: Duration = Duration::from_millis(3000);

/// How long the pop-up announcing newly-unlocked content stays on screen
pub(crate) const CELEBRATION_DURATION: Duration = Duration::from_millis(3000);

/// Length of the snake at the start of a game
pub(crate) const INITIAL_SNAKE_LENGTH: usize = 3;

/// Where the food sits when the page is first opened
pub(crate) const INITIAL_FOOD_POSITION: Position = Position { x: 15, y: 10 };

/// Probability that newly-placed food is special
pub(crate) const SPECIAL_FOOD_PROBABILITY: f64 = 0.2;

/// Points for regular food
pub(crate) const REGULAR_FOOD_VALUE: u32 = 1;

/// Points for special food
pub(crate) const SPECIAL_FOOD_VALUE: u32 = 3;

/// Points for regular food on Hard difficulty
pub(crate) const HARD_REGULAR_FOOD_POINTS: u32 = 2;

/// Draw everything inside a rectangle of this size in the center of the
/// terminal window.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 100,
    height: 38,
};

/// Glyph for the snake's head when it is moving up
pub(crate) const SNAKE_HEAD_UP_SYMBOL: char = 'v';

/// Glyph for the snake's head when it is moving down
pub(crate) const SNAKE_HEAD_DOWN_SYMBOL: char = '^';

/// Glyph for the snake's head when it is moving right
pub(crate) const SNAKE_HEAD_RIGHT_SYMBOL: char = '<';

/// Glyph for the snake's head when it is moving left
pub(crate) const SNAKE_HEAD_LEFT_SYMBOL: char = '>';

/// Glyph for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: char = '⚬';

/// Glyph for regular food
pub(crate) const REGULAR_FOOD_SYMBOL: char = '●';

/// Glyph for special food
pub(crate) const SPECIAL_FOOD_SYMBOL: char = '★';

/// Marker for a threshold that has been reached
pub(crate) const UNLOCKED_SYMBOL: char = '●';

/// Marker for a threshold that has not been reached
pub(crate) const LOCKED_SYMBOL: char = '○';

/// Glyph for the snake's head when it's collided with a wall or itself
pub(crate) const COLLISION_SYMBOL: char = '×';

const SEA_GREEN: Color = Color::Rgb(0x2E, 0x8B, 0x57);
const PALE_GREEN: Color = Color::Rgb(0x98, 0xFB, 0x98);
const OLIVE: Color = Color::Rgb(0x55, 0x6B, 0x2F);
const CREAM: Color = Color::Rgb(0xFF, 0xFD, 0xD0);
const GOLD: Color = Color::Rgb(0xFF, 0xD7, 0x00);
const HOT_PINK: Color = Color::Rgb(0xFF, 0x69, 0xB4);

/// Style for the snake's head and body
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Style for regular food
pub(crate) const REGULAR_FOOD_STYLE: Style = Style::new().fg(Color::LightRed);

/// Style for special food
pub(crate) const SPECIAL_FOOD_STYLE: Style = Style::new().fg(GOLD).add_modifier(Modifier::BOLD);

/// Style for [`COLLISION_SYMBOL`]
pub(crate) const COLLISION_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::REVERSED);

/// Style for the border around the playing field
pub(crate) const BOARD_BORDER_STYLE: Style = Style::new().fg(SEA_GREEN);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for panel headings
pub(crate) const HEADING_STYLE: Style = Style::new().fg(SEA_GREEN).add_modifier(Modifier::BOLD);

/// Style for the page title in the header
pub(crate) const TITLE_STYLE: Style = Style::new()
    .fg(CREAM)
    .bg(SEA_GREEN)
    .add_modifier(Modifier::BOLD);

/// Style for field labels on the profile card
pub(crate) const LABEL_STYLE: Style = Style::new().fg(OLIVE).add_modifier(Modifier::BOLD);

/// Style for personality tags on the profile card
pub(crate) const TAG_STYLE: Style = Style::new().fg(SEA_GREEN).bg(PALE_GREEN);

/// Style for the selected difficulty
pub(crate) const SELECTED_STYLE: Style = Style::new()
    .fg(SEA_GREEN)
    .bg(PALE_GREEN)
    .add_modifier(Modifier::BOLD);

/// Style for the score pill
pub(crate) const SCORE_STYLE: Style = Style::new()
    .fg(CREAM)
    .bg(SEA_GREEN)
    .add_modifier(Modifier::BOLD);

/// Style for a threshold badge or unlockable that has been reached
pub(crate) const UNLOCKED_STYLE: Style = Style::new().fg(SEA_GREEN).add_modifier(Modifier::BOLD);

/// Style for a threshold badge or unlockable that has not been reached
pub(crate) const LOCKED_STYLE: Style = Style::new().fg(Color::DarkGray);

/// Style for the fun fact shown after eating
pub(crate) const MESSAGE_STYLE: Style = Style::new().fg(CREAM).bg(Color::Black);

/// Style for the unlock celebration pop-up
pub(crate) const CELEBRATION_STYLE: Style = Style::new().fg(HOT_PINK).add_modifier(Modifier::BOLD);

/// Style for de-emphasized text
pub(crate) const DIM_STYLE: Style = Style::new().fg(Color::Gray);

//! Drill core
//!
//! All prompt logic lives here. Like a simulation step, it is pure given its
//! seed:
//! - Seeded RNG only (`RandomPicker`)
//! - Time is passed in, never read
//! - No DOM or terminal dependencies

pub mod catalog;
pub mod colors;
pub mod direction;
pub mod picker;
pub mod prompt;
pub mod session;
pub mod timer;

pub use catalog::{FOULS, FoulDefinition, VIOLATIONS, foul_by_name};
pub use colors::{PALETTE, Team, TeamColor, TeamColorAssignment};
pub use direction::{ArrowGroup, Direction, DirectionIndicator};
pub use picker::RandomPicker;
pub use prompt::{
    Category, FoulPrompt, LastTouch, NumberPrompt, OutOfBoundsPrompt, Prompt, ViolationPrompt,
    generate, generate_foul, generate_number, generate_out_of_bounds, generate_violation,
};
pub use session::{DisplayBoard, TrainingSession};
pub use timer::{ReplayTimer, TickHandle, TimerState, validate_interval};

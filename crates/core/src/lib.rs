#![warn(clippy::all, missing_docs)]

//! Core game logic for Detective Quest.
//!
//! This crate hosts the mansion map, the clue collection, the clue to
//! suspect index, and the investigation state machine that ties them
//! together, along with configuration shared with the terminal frontend.

#[allow(missing_docs)]
pub mod clues;
pub mod config;
#[allow(missing_docs)]
pub mod investigation;
#[allow(missing_docs)]
pub mod map;
pub mod scenario;
#[allow(missing_docs)]
pub mod suspects;

pub use clues::ClueSet;
pub use config::AppConfig;
pub use investigation::{
    judge, Blocked, Command, Finding, Investigation, InvestigationError, Phase, StepOutcome,
    Verdict,
};
pub use map::{Direction, MansionMap, MapError, Room, RoomId, RoomSpec};
pub use scenario::{Association, Scenario};
pub use suspects::{IndexError, SuspectIndex};

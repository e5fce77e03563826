//! The exploration / tally / verdict state machine.

use std::fmt;

use tracing::{debug, info};

use crate::{
    clues::ClueSet,
    map::{Direction, MansionMap, Room, RoomId},
    suspects::SuspectIndex,
};

/// Number of matching clues needed to back an accusation.
pub const DEFAULT_THRESHOLD: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Exploring,
    Tallying,
    Verdict,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Phase::Exploring => "exploring",
            Phase::Tallying => "tallying",
            Phase::Verdict => "verdict",
        };
        f.write_str(label)
    }
}

/// One request from whoever drives the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Go(Direction),
    Stop,
}

impl Command {
    pub const LEFT: Command = Command::Go(Direction::Left);
    pub const RIGHT: Command = Command::Go(Direction::Right);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The cursor moved into `room`, which may hold a clue.
    Moved { room: String, clue: Option<String> },
    /// Nothing changed.
    Blocked(Blocked),
    /// Exploration is over; the investigation now waits for an accusation.
    Stopped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Blocked {
    NoPath(Direction),
    NotExploring,
}

impl fmt::Display for Blocked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Blocked::NoPath(direction) => write!(f, "there is no path to the {direction}"),
            Blocked::NotExploring => f.write_str("exploration has already ended"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Finding {
    Sufficient,
    Insufficient,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The accused name was empty; nothing was counted.
    Invalid,
    Judged { tally: usize, finding: Finding },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvestigationError {
    #[error("an accusation can only be made after exploration stops (currently {0})")]
    NotTallying(Phase),
    #[error("the evidence threshold must be at least 1")]
    ZeroThreshold,
}

/// Pure threshold rule shared by every verdict.
pub fn judge(tally: usize, threshold: usize) -> Finding {
    if tally >= threshold {
        Finding::Sufficient
    } else {
        Finding::Insufficient
    }
}

/// A single play-through over a mansion.
///
/// The investigation owns the map, the suspect index and the clues found so
/// far. The root room is entered on construction.
#[derive(Debug)]
pub struct Investigation {
    map: MansionMap,
    index: SuspectIndex,
    clues: ClueSet,
    cursor: RoomId,
    trail: Vec<RoomId>,
    phase: Phase,
    threshold: usize,
}

impl Investigation {
    pub fn new(map: MansionMap, index: SuspectIndex) -> Self {
        Self::start(map, index, DEFAULT_THRESHOLD)
    }

    pub fn with_threshold(
        map: MansionMap,
        index: SuspectIndex,
        threshold: usize,
    ) -> Result<Self, InvestigationError> {
        if threshold == 0 {
            return Err(InvestigationError::ZeroThreshold);
        }
        Ok(Self::start(map, index, threshold))
    }

    fn start(map: MansionMap, index: SuspectIndex, threshold: usize) -> Self {
        let root = map.root();
        let mut investigation = Self {
            map,
            index,
            clues: ClueSet::new(),
            cursor: root,
            trail: Vec::new(),
            phase: Phase::Exploring,
            threshold,
        };
        investigation.enter(root);
        investigation
    }

    fn enter(&mut self, room: RoomId) {
        self.cursor = room;
        self.trail.push(room);
        let room = self.map.room(room);
        debug!(room = room.name(), clue = ?room.clue(), "Entered room");
        if let Some(clue) = room.clue() {
            self.clues.insert(clue);
        }
    }

    /// Apply one driver command.
    pub fn step(&mut self, command: Command) -> StepOutcome {
        if self.phase != Phase::Exploring {
            return StepOutcome::Blocked(Blocked::NotExploring);
        }

        match command {
            Command::Go(direction) => match self.map.traverse_step(self.cursor, direction) {
                Some(next) => {
                    self.enter(next);
                    let room = self.map.room(next);
                    StepOutcome::Moved {
                        room: room.name().to_string(),
                        clue: room.clue().map(str::to_string),
                    }
                }
                None => {
                    debug!(%direction, room = self.current_room().name(), "No path");
                    StepOutcome::Blocked(Blocked::NoPath(direction))
                }
            },
            Command::Stop => {
                self.phase = Phase::Tallying;
                info!(
                    rooms_visited = self.trail.len(),
                    clues = self.clues.len(),
                    "Exploration stopped"
                );
                StepOutcome::Stopped
            }
        }
    }

    /// Number of collected clues whose suspect is exactly `accused`.
    pub fn tally(&self, accused: &str) -> usize {
        self.supporting_clues(accused).len()
    }

    /// Collected clues pointing at `accused`, in ascending order.
    pub fn supporting_clues(&self, accused: &str) -> Vec<&str> {
        self.clues
            .iter()
            .filter(|clue| self.index.get(clue) == Some(accused))
            .collect()
    }

    /// Judge the accusation of `accused`. Only valid once exploration has stopped.
    pub fn accuse(&mut self, accused: &str) -> Result<Verdict, InvestigationError> {
        if self.phase != Phase::Tallying {
            return Err(InvestigationError::NotTallying(self.phase));
        }

        let verdict = if accused.is_empty() {
            Verdict::Invalid
        } else {
            let tally = self.tally(accused);
            Verdict::Judged {
                tally,
                finding: judge(tally, self.threshold),
            }
        };
        self.phase = Phase::Verdict;
        info!(accused, ?verdict, "Verdict reached");
        Ok(verdict)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    pub fn clues(&self) -> &ClueSet {
        &self.clues
    }

    pub fn map(&self) -> &MansionMap {
        &self.map
    }

    pub fn index(&self) -> &SuspectIndex {
        &self.index
    }

    pub fn cursor(&self) -> RoomId {
        self.cursor
    }

    pub fn current_room(&self) -> &Room {
        self.map.room(self.cursor)
    }

    /// Names of the rooms entered so far, root first.
    pub fn path(&self) -> impl Iterator<Item = &str> + '_ {
        self.trail.iter().map(|id| self.map.room(*id).name())
    }
}

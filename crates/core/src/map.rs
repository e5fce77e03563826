//! Static mansion layout used for navigation.

use std::fmt;

/// Which child of a room to move into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Left, Direction::Right];
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Left => f.write_str("left"),
            Direction::Right => f.write_str("right"),
        }
    }
}

/// Nested description of a room and its subtree, used to build a [`MansionMap`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomSpec {
    pub name: String,
    pub clue: Option<String>,
    pub left: Option<Box<RoomSpec>>,
    pub right: Option<Box<RoomSpec>>,
}

impl RoomSpec {
    /// A room without children.
    pub fn new(name: impl Into<String>, clue: Option<&str>) -> Self {
        Self {
            name: name.into(),
            clue: clue.map(str::to_string),
            left: None,
            right: None,
        }
    }

    pub fn with_left(mut self, child: RoomSpec) -> Self {
        self.left = Some(Box::new(child));
        self
    }

    pub fn with_right(mut self, child: RoomSpec) -> Self {
        self.right = Some(Box::new(child));
        self
    }
}

/// Handle to a room inside a [`MansionMap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoomId(usize);

/// A single room. Rooms never change after the map is built.
#[derive(Debug, Clone)]
pub struct Room {
    name: String,
    clue: Option<String>,
    left: Option<RoomId>,
    right: Option<RoomId>,
}

impl Room {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The clue hidden in this room. Never `Some("")`.
    pub fn clue(&self) -> Option<&str> {
        self.clue.as_deref()
    }

    pub fn child(&self, direction: Direction) -> Option<RoomId> {
        match direction {
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MapError {
    #[error("room names must not be empty (room #{index} in build order)")]
    EmptyRoomName { index: usize },
}

/// Immutable binary tree of rooms.
///
/// Rooms live in an arena owned by the map; children are referenced by
/// [`RoomId`], so a map can never alias rooms from another map.
#[derive(Debug, Clone)]
pub struct MansionMap {
    rooms: Vec<Room>,
}

impl MansionMap {
    /// Build the tree described by `root`. The root always gets the first slot.
    pub fn build(root: &RoomSpec) -> Result<Self, MapError> {
        let mut rooms = Vec::new();
        // (spec, parent slot, direction from parent)
        let mut pending: Vec<(&RoomSpec, Option<(usize, Direction)>)> = vec![(root, None)];

        while let Some((spec, parent)) = pending.pop() {
            let index = rooms.len();
            if spec.name.is_empty() {
                return Err(MapError::EmptyRoomName { index });
            }
            rooms.push(Room {
                name: spec.name.clone(),
                clue: spec.clue.clone().filter(|clue| !clue.is_empty()),
                left: None,
                right: None,
            });

            if let Some((parent, direction)) = parent {
                let parent: &mut Room = &mut rooms[parent];
                match direction {
                    Direction::Left => parent.left = Some(RoomId(index)),
                    Direction::Right => parent.right = Some(RoomId(index)),
                }
            }

            if let Some(right) = spec.right.as_deref() {
                pending.push((right, Some((index, Direction::Right))));
            }
            if let Some(left) = spec.left.as_deref() {
                pending.push((left, Some((index, Direction::Left))));
            }
        }

        Ok(Self { rooms })
    }

    pub fn root(&self) -> RoomId {
        RoomId(0)
    }

    /// Look up a room by handle.
    ///
    /// Handles are only minted by this map, so lookups cannot miss.
    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id.0]
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Child of `current` in `direction`, or `None` when there is no path that way.
    pub fn traverse_step(&self, current: RoomId, direction: Direction) -> Option<RoomId> {
        self.room(current).child(direction)
    }

    /// Name of the room `direction` would lead to.
    pub fn child_name(&self, current: RoomId, direction: Direction) -> Option<&str> {
        self.traverse_step(current, direction)
            .map(|child| self.room(child).name())
    }

    /// Directions that lead somewhere from `current`.
    pub fn exits(&self, current: RoomId) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|direction| self.traverse_step(current, *direction).is_some())
            .collect()
    }

    /// All rooms, root first, in pre-order.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> + '_ {
        self.rooms.iter()
    }
}

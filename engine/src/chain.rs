use std::collections::VecDeque;

use crate::grid::{COMPASS, Direction, Position, Turn};
use crate::tiles::Rotation;

/// The snake's body: an ordered sequence of cells with the head at the front.
///
/// Growth is a two-step protocol. `grow` appends a duplicate of the tail and
/// marks the growth as pending; the next `advance` then holds the tail cell in
/// place instead of vacating it. Callers must not `advance` twice between a
/// `grow` and its consuming step.
#[derive(Clone, Debug)]
pub struct BodyChain {
    segments: VecDeque<Position>,
    direction: Direction,
    compass_index: usize,
    growth_pending: bool,
}

impl BodyChain {
    /// A two-segment chain facing right, with the tail one cell to the west
    /// of the head.
    pub fn new(head: Position) -> Self {
        let mut segments = VecDeque::new();
        segments.push_back(head);
        segments.push_back(Position::new(head.x - 1, head.y));

        Self {
            segments,
            direction: COMPASS[0],
            compass_index: 0,
            growth_pending: false,
        }
    }

    pub fn head(&self) -> Position {
        *self
            .segments
            .front()
            .expect("chain should never be empty")
    }

    pub fn tail(&self) -> Position {
        *self
            .segments
            .back()
            .expect("chain should never be empty")
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Quarter-turn rotation of the head sprite for the current facing.
    pub fn heading_rotation(&self) -> Rotation {
        Rotation::from_quarter_turns(self.compass_index)
    }

    /// Segment positions from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = Position> + '_ {
        self.segments.iter().copied()
    }

    /// Rotates the facing one compass step. The only way the direction ever
    /// changes; it takes effect on the next `advance`.
    pub fn turn(&mut self, turn: Turn) {
        self.compass_index = match turn {
            Turn::Clockwise => (self.compass_index + 1) % 4,
            Turn::CounterClockwise => (self.compass_index + 3) % 4,
        };
        self.direction = COMPASS[self.compass_index];
    }

    /// Appends a duplicate of the tail and marks growth pending for the next
    /// `advance`.
    pub fn grow(&mut self) {
        let tail = self.tail();
        self.segments.push_back(tail);
        self.growth_pending = true;
    }

    /// One atomic simulation step: the head moves one cell in the facing
    /// direction and every other segment adopts the position its predecessor
    /// held before the step. Returns the cell the tail vacated, or `None`
    /// when pending growth held the tail in place.
    pub fn advance(&mut self) -> Option<Position> {
        let new_head = self.head().step(self.direction);
        self.segments.push_front(new_head);
        let popped = self
            .segments
            .pop_back()
            .expect("chain should never be empty");

        if self.growth_pending {
            // The popped cell is the duplicate grow() appended; the tail
            // still covers it.
            self.growth_pending = false;
            None
        } else {
            Some(popped)
        }
    }
}

use crate::chain::BodyChain;
use crate::grid::{Position, Turn};
use crate::log;
use crate::occupancy::OccupancySet;
use crate::session_rng::SessionRng;
use crate::settings::GameSettings;
use crate::spawner::spawn_pickup;
use crate::tiles::{Rotation, SegmentTile, body_tile, tail_rotation};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    Starting,
    Running,
    Paused,
    Over,
}

/// Edge-triggered input, sampled once per rendered frame by the frontend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    TurnClockwise,
    TurnCounterClockwise,
    PauseToggle,
    Confirm,
}

/// One resolved draw call for the renderer: which tile, rotated how, on which
/// cell. Rotated tiles pivot around their cell center.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpritePlacement {
    pub tile: SegmentTile,
    pub rotation: Rotation,
    pub cell: Position,
}

/// Everything the renderer needs for one frame.
#[derive(Clone, Debug)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub score: u32,
    pub pickup: Position,
    pub segments: Vec<SpritePlacement>,
}

/// The simulation: chain, occupancy, pickup and phase, driven by a fixed
/// cadence of frames per tick. Single-threaded; all mutation happens from
/// `handle_input` and `on_frame`.
pub struct Game {
    settings: GameSettings,
    chain: BodyChain,
    occupied: OccupancySet,
    pickup: Position,
    phase: GamePhase,
    buffered_turn: Option<Turn>,
    frame_counter: u32,
    score: u32,
    rng: SessionRng,
}

impl Game {
    pub fn new(settings: GameSettings, mut rng: SessionRng) -> Self {
        let chain = BodyChain::new(settings.center());
        let occupied = OccupancySet::from_chain(&chain);
        let pickup = spawn_pickup(
            settings.board_width,
            settings.board_height,
            &occupied,
            &mut rng,
        );
        log!("Pickup spawned at ({}, {})", pickup.x, pickup.y);

        Self {
            settings,
            chain,
            occupied,
            pickup,
            phase: GamePhase::Starting,
            buffered_turn: None,
            frame_counter: 0,
            score: 0,
            rng,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn pickup(&self) -> Position {
        self.pickup
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    /// Applies one input edge. Turn commands are buffered last-write-wins and
    /// consumed at the next tick boundary, so at most one direction change
    /// takes effect per simulation step.
    pub fn handle_input(&mut self, event: InputEvent) {
        match (self.phase, event) {
            (GamePhase::Starting, InputEvent::Confirm) => {
                self.phase = GamePhase::Running;
            }
            (GamePhase::Running, InputEvent::PauseToggle) => {
                self.phase = GamePhase::Paused;
            }
            (GamePhase::Paused, InputEvent::PauseToggle) => {
                self.phase = GamePhase::Running;
            }
            (GamePhase::Running, InputEvent::TurnClockwise) => {
                self.buffered_turn = Some(Turn::Clockwise);
            }
            (GamePhase::Running, InputEvent::TurnCounterClockwise) => {
                self.buffered_turn = Some(Turn::CounterClockwise);
            }
            _ => {}
        }
    }

    /// Advances the frame counter and runs one simulation tick every
    /// `frames_per_tick` frames. Does nothing outside the Running phase, so a
    /// finished or paused game performs no further chain mutation.
    pub fn on_frame(&mut self) {
        if self.phase != GamePhase::Running {
            return;
        }

        self.frame_counter += 1;
        if self.frame_counter >= self.settings.frames_per_tick {
            self.frame_counter = 0;
            self.tick();
        }
    }

    fn tick(&mut self) {
        if let Some(turn) = self.buffered_turn.take() {
            self.chain.turn(turn);
        }

        if self.chain.head() == self.pickup {
            self.score += 1;
            self.pickup = spawn_pickup(
                self.settings.board_width,
                self.settings.board_height,
                &self.occupied,
                &mut self.rng,
            );
            self.chain.grow();
            log!(
                "Ate pickup, score {}. Next pickup at ({}, {})",
                self.score,
                self.pickup.x,
                self.pickup.y
            );
        }

        let vacated = self.chain.advance();
        let head = self.chain.head();

        // Self-collision is checked before the new head cell is inserted, so
        // the head never collides with its own new cell.
        if self.occupied.contains(head) || !self.settings.contains(head) {
            self.phase = GamePhase::Over;
            log!("Collision at ({}, {}), game over", head.x, head.y);
        }

        self.occupied.insert(head);
        if let Some(tail) = vacated {
            self.occupied.remove(tail);
        }
    }

    /// Resolves the chain into per-segment tiles for the renderer. The chain
    /// always has at least two segments, so head and tail are distinct.
    pub fn snapshot(&self) -> Snapshot {
        let cells: Vec<Position> = self.chain.segments().collect();
        let last = cells.len() - 1;

        let mut segments = Vec::with_capacity(cells.len());
        for (i, &cell) in cells.iter().enumerate() {
            let placement = if i == 0 {
                SpritePlacement {
                    tile: SegmentTile::Head,
                    rotation: self.chain.heading_rotation(),
                    cell,
                }
            } else if i == last {
                SpritePlacement {
                    tile: SegmentTile::Tail,
                    rotation: tail_rotation(cell, cells[i - 1]),
                    cell,
                }
            } else {
                SpritePlacement {
                    tile: body_tile(cells[i - 1], cell, cells[i + 1]),
                    rotation: Rotation::Deg0,
                    cell,
                }
            };
            segments.push(placement);
        }

        Snapshot {
            phase: self.phase,
            score: self.score,
            pickup: self.pickup,
            segments,
        }
    }
}

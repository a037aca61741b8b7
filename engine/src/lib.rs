pub mod chain;
pub mod config;
pub mod game;
pub mod grid;
pub mod ground;
pub mod logger;
pub mod occupancy;
pub mod session_rng;
pub mod settings;
pub mod spawner;
pub mod tiles;

pub use chain::BodyChain;
pub use game::{Game, GamePhase, InputEvent, Snapshot, SpritePlacement};
pub use grid::{Direction, Position, Turn};
pub use ground::{GrassEdge, GroundLayer, GroundTile};
pub use occupancy::OccupancySet;
pub use session_rng::SessionRng;
pub use settings::GameSettings;
pub use tiles::{Rotation, SegmentTile};

mod broadcaster;

pub mod caro;

pub use broadcaster::{GameBroadcaster, GameEvent, GameSummary, RecordingBroadcaster};

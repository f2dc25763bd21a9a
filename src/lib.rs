//! Classic single-player snake on a bounded playfield.
//!
//! The pure movement and collision rules live in the game module; the
//! terminal concerns around them are split into input translation (input),
//! frame rendering (render), session metrics (metrics), and the fixed-rate
//! loop that ties them together (modes).

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;

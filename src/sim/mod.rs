//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One logical `now_ms` per tick, supplied by the caller
//! - Seeded RNG only
//! - Stable iteration order (insertion order, addressed by entity id)
//! - No rendering or platform dependencies

pub mod ai;
pub mod arena;
pub mod chain;
pub mod effects;
pub mod entity;
pub mod rng;
pub mod spawner;
pub mod state;
pub mod status;
pub mod tick;
pub mod upgrade;
pub mod wave;
pub mod weapon;

pub use arena::{Arena, Rect};
pub use effects::{Effects, FloatingText, LightningSegment, SmallDot};
pub use entity::{Enemy, EnemyKind, EnemyProjectile, Player, PlayerProjectile, Weapon};
pub use rng::GameRng;
pub use state::{GameState, RunState};
pub use tick::{TickInput, TickOutcome, tick};
pub use upgrade::{Ability, Upgrade};
pub use wave::WavePhase;

//! Between-wave upgrades
//!
//! The pool always holds at least two entries, so a full offer of two
//! distinct choices can be made every time.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::arena::{Arena, Rect};
use super::rng::GameRng;
use super::state::RunState;
use crate::consts::{DAMAGE_BONUS, HEAL_AMOUNT, UPGRADE_CHOICES};
use crate::settings::Settings;

/// Owned ability flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Ability {
    Flame,
    Poison,
    Lightning,
    Knockback,
    Piercing,
}

impl Ability {
    pub fn name(self) -> &'static str {
        match self {
            Ability::Flame => "Flame",
            Ability::Poison => "Poison",
            Ability::Lightning => "Lightning",
            Ability::Knockback => "Knockback",
            Ability::Piercing => "Piercing",
        }
    }
}

/// One offered choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Upgrade {
    Grant(Ability),
    Heal,
    Damage,
}

impl Upgrade {
    pub fn label(self) -> &'static str {
        match self {
            Upgrade::Grant(ability) => ability.name(),
            Upgrade::Heal => "Heal +20 HP",
            Upgrade::Damage => "Damage +10",
        }
    }
}

/// Every upgrade currently available to this run
pub fn build_pool(run: &RunState, settings: &Settings) -> Vec<Upgrade> {
    let mut pool: Vec<Upgrade> = [Ability::Flame, Ability::Poison, Ability::Lightning]
        .into_iter()
        .filter(|a| !run.owns(*a))
        .map(Upgrade::Grant)
        .collect();
    if run.knockback_level < settings.knockback_max_level {
        pool.push(Upgrade::Grant(Ability::Knockback));
    }
    if run.pierce_level < settings.pierce_max_level {
        pool.push(Upgrade::Grant(Ability::Piercing));
    }
    pool.push(Upgrade::Heal);
    pool.push(Upgrade::Damage);
    pool
}

/// Draw up to two distinct choices from the pool
pub fn offer(run: &RunState, settings: &Settings, rng: &mut GameRng) -> Vec<Upgrade> {
    let pool = build_pool(run, settings);
    rng.sample(&pool, UPGRADE_CHOICES.min(pool.len()))
}

/// Apply a chosen upgrade to the run
pub fn apply(run: &mut RunState, settings: &Settings, upgrade: Upgrade) {
    match upgrade {
        Upgrade::Heal => {
            run.player_hp = (run.player_hp + HEAL_AMOUNT).min(settings.max_hp);
        }
        Upgrade::Damage => run.arrow_damage += DAMAGE_BONUS,
        Upgrade::Grant(Ability::Knockback) => {
            if run.knockback_level < settings.knockback_max_level {
                run.knockback_level += 1;
            }
            run.abilities.insert(Ability::Knockback);
        }
        Upgrade::Grant(Ability::Piercing) => {
            if run.pierce_level < settings.pierce_max_level {
                run.pierce_level += 1;
            }
            run.abilities.insert(Ability::Piercing);
        }
        Upgrade::Grant(ability) => {
            run.abilities.insert(ability);
        }
    }
    log::info!("Upgrade chosen: {}", upgrade.label());
}

/// Button rectangles for an offer of `count` choices, centered in the arena
pub fn option_rects(arena: &Arena, count: usize) -> Vec<Rect> {
    const W: f32 = 280.0;
    const H: f32 = 80.0;
    const GAP: f32 = 40.0;
    let total = count as f32 * W + count.saturating_sub(1) as f32 * GAP;
    let left = arena.width / 2.0 - total / 2.0;
    let top = arena.height / 2.0 - H / 2.0;
    (0..count)
        .map(|i| Rect::new(left + i as f32 * (W + GAP), top, W, H))
        .collect()
}

/// Which option (if any) a click at `pointer` lands on
pub fn option_at(arena: &Arena, count: usize, pointer: Vec2) -> Option<usize> {
    option_rects(arena, count)
        .iter()
        .position(|r| r.contains_point(pointer))
}

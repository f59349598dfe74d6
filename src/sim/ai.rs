//! Enemy behaviour: pursuit and archer shots

use glam::Vec2;

use super::entity::{Enemy, EnemyKind, EnemyProjectile};

/// Step an enemy toward `target`, rounding each axis to whole pixels
///
/// Poison halves the effective speed. Halves round to even, so a half-speed
/// enemy lined up on one axis stays put. Zero distance is a no-op.
pub fn pursue(enemy: &mut Enemy, target: Vec2) {
    let delta = target - enemy.center();
    let dist = delta.length();
    if dist == 0.0 {
        return;
    }
    let speed = if enemy.is_poisoned() {
        enemy.speed * 0.5
    } else {
        enemy.speed
    };
    let step = delta / dist * speed;
    enemy
        .rect
        .translate(Vec2::new(step.x.round_ties_even(), step.y.round_ties_even()));
}

/// Fire at `target` if this is an archer whose shot timer has elapsed
pub fn try_shoot(enemy: &mut Enemy, target: Vec2, damage: i32, now_ms: i64) -> Option<EnemyProjectile> {
    if enemy.kind != EnemyKind::Archer {
        return None;
    }
    if now_ms - enemy.shoot_timer < enemy.shoot_interval {
        return None;
    }
    enemy.shoot_timer = now_ms;
    Some(EnemyProjectile::aimed(enemy.center(), target, damage))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::GameRng;

    fn enemy(kind: EnemyKind, at: Vec2) -> Enemy {
        let mut rng = GameRng::new(5);
        Enemy::regular(1, kind, at, 0, &mut rng)
    }

    #[test]
    fn test_pursuit_rounds_per_axis() {
        let mut e = enemy(EnemyKind::Normal, Vec2::new(0.0, 0.0));
        // Diagonal: 2 * 0.707 = 1.41 -> 1 on each axis
        pursue(&mut e, Vec2::new(100.0, 100.0));
        assert_eq!(e.center(), Vec2::new(1.0, 1.0));

        let mut e = enemy(EnemyKind::Fast, Vec2::new(0.0, 0.0));
        pursue(&mut e, Vec2::new(-50.0, 0.0));
        assert_eq!(e.center(), Vec2::new(-3.0, 0.0));
    }

    #[test]
    fn test_pursuit_zero_distance_noop() {
        let mut e = enemy(EnemyKind::Normal, Vec2::new(10.0, 10.0));
        pursue(&mut e, Vec2::new(10.0, 10.0));
        assert_eq!(e.center(), Vec2::new(10.0, 10.0));
    }

    #[test]
    fn test_poison_halves_speed() {
        let mut e = enemy(EnemyKind::Tank, Vec2::new(0.0, 0.0));
        e.speed = 4.0;
        e.poison_ms_left = 3000;
        pursue(&mut e, Vec2::new(0.0, 100.0));
        assert_eq!(e.center(), Vec2::new(0.0, 2.0));
    }

    #[test]
    fn test_half_speed_on_axis_stays_put() {
        // Tank speed 1, poisoned: a 0.5 px step rounds to 0
        let mut e = enemy(EnemyKind::Tank, Vec2::new(0.0, 0.0));
        e.poison_ms_left = 3000;
        pursue(&mut e, Vec2::new(100.0, 0.0));
        assert_eq!(e.center(), Vec2::ZERO);

        // 1.5 px rounds to 2
        e.speed = 3.0;
        pursue(&mut e, Vec2::new(0.0, -100.0));
        assert_eq!(e.center(), Vec2::new(0.0, -2.0));
    }

    #[test]
    fn test_archer_shot_timer() {
        let mut e = enemy(EnemyKind::Archer, Vec2::new(0.0, 0.0));
        let interval = e.shoot_interval;
        let target = Vec2::new(100.0, 0.0);
        assert!(try_shoot(&mut e, target, 10, interval - 1).is_none());
        let shot = try_shoot(&mut e, target, 10, interval).unwrap();
        assert_eq!(shot.vel, Vec2::new(8.0, 0.0));
        assert_eq!(shot.damage, 10);
        assert_eq!(shot.rect.w, 8.0);
        assert_eq!(shot.rect.center(), Vec2::ZERO);
        assert_eq!(e.shoot_timer, interval);
        assert!(try_shoot(&mut e, target, 10, interval + 1).is_none());
    }

    #[test]
    fn test_non_archers_never_shoot() {
        let mut e = enemy(EnemyKind::Normal, Vec2::ZERO);
        assert!(try_shoot(&mut e, Vec2::new(1.0, 0.0), 10, 1_000_000).is_none());
    }
}

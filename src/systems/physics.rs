//! Velocity integration with damping
//!
//! position += velocity, then velocity bleeds off by the damping factor so
//! particles settle instead of drifting forever. There is no collision
//! response between particles; the only force input is the interaction
//! driver.

use crate::domain::particle::ParticleStore;

/// Advance every particle by `dt` (in 60Hz frame units). Damping is the
/// per-frame multiplier; for fractional frames it is applied as
/// `damping^dt` so variable-rate hosts get the same decay curve.
pub fn integrate(store: &mut ParticleStore, damping: f32, dt: f32) {
    let decay = damping.powf(dt);
    for i in 0..store.len() {
        store.x[i] += store.vx[i] * dt;
        store.y[i] += store.vy[i] * dt;
        store.vx[i] *= decay;
        store.vy[i] *= decay;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_frame_matches_reference_constants() {
        let mut store = ParticleStore::new();
        store.push(10.0, 20.0, 2.0, -1.0, 0);

        integrate(&mut store, 0.95, 1.0);

        assert_eq!(store.x[0], 12.0);
        assert_eq!(store.y[0], 19.0);
        assert!((store.vx[0] - 1.9).abs() < 1e-6);
        assert!((store.vy[0] + 0.95).abs() < 1e-6);
    }

    #[test]
    fn velocity_decays_toward_rest() {
        let mut store = ParticleStore::new();
        store.push(0.0, 0.0, 5.0, 5.0, 0);

        for _ in 0..300 {
            integrate(&mut store, 0.95, 1.0);
        }

        assert!(store.vx[0].abs() < 1e-3);
        assert!(store.vy[0].abs() < 1e-3);
    }

    #[test]
    fn two_half_frames_decay_like_one_whole_frame() {
        let mut a = ParticleStore::new();
        a.push(0.0, 0.0, 4.0, 0.0, 0);
        let mut b = ParticleStore::new();
        b.push(0.0, 0.0, 4.0, 0.0, 0);

        integrate(&mut a, 0.9, 1.0);
        integrate(&mut b, 0.9, 0.5);
        integrate(&mut b, 0.9, 0.5);

        assert!((a.vx[0] - b.vx[0]).abs() < 1e-4);
    }
}

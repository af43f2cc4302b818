//! Deterministic PRNG (xorshift32)
//!
//! Decorative motion does not need cryptographic quality; it needs to be
//! fast, seedable and reproducible in tests. State is a bare `u32`
//! threaded through callers, never a global.

/// Advance the xorshift32 state and return the next raw value.
#[inline]
pub fn next_u32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Uniform float in `[0, 1)` from the high bits of the state.
#[inline]
pub fn next_f32(state: &mut u32) -> f32 {
    (next_u32(state) >> 8) as f32 / 16_777_216.0
}

/// Uniform float in `[min, max)`.
#[inline]
pub fn range(state: &mut u32, min: f32, max: f32) -> f32 {
    min + next_f32(state) * (max - min)
}

/// Pick a uniformly random element. Callers guarantee a non-empty slice
/// (config validation rejects empty palettes).
#[inline]
pub fn pick<'a, T>(state: &mut u32, items: &'a [T]) -> &'a T {
    let i = (next_u32(state) as usize) % items.len();
    &items[i]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = 12_345;
        let mut b = 12_345;
        for _ in 0..100 {
            assert_eq!(next_u32(&mut a), next_u32(&mut b));
        }
    }

    #[test]
    fn floats_stay_in_unit_interval() {
        let mut state = 1;
        for _ in 0..10_000 {
            let v = next_f32(&mut state);
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn range_respects_bounds() {
        let mut state = 99;
        for _ in 0..1_000 {
            let v = range(&mut state, -5.0, 5.0);
            assert!((-5.0..5.0).contains(&v));
        }
    }

    #[test]
    fn pick_covers_all_items() {
        let mut state = 7;
        let items = [10, 20, 30];
        let mut seen = [false; 3];
        for _ in 0..200 {
            let v = pick(&mut state, &items);
            seen[(v / 10 - 1) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}

//! Falling-character background effect ("matrix rain").
//!
//! The effect is a fixed-width grid of independent column counters. Each
//! tick advances every column head by one row; a head that has fallen past
//! the bottom edge is probabilistically reset to the top, so columns
//! restart out of phase. Nothing here owns a timer: ticks are driven by
//! whoever owns the effect, and dropping the value stops it completely.
//! [`RainSurface`] enforces that at most one effect instance exists per
//! surface, so toggling can never leak a second ticker.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Character set the renderer samples from, as in the classic effect.
const GLYPHS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ123456789@#$%^&*()*&^%";

/// Probability threshold for resetting a column that has left the screen.
const RESET_KEEP: f32 = 0.975;

/// Column-counter grid for the rain effect.
#[derive(Debug)]
pub struct RainEffect {
    columns: Vec<u32>,
    rows: u32,
    rng: StdRng,
}

impl RainEffect {
    /// Create an effect sized to the given grid, seeded from the OS.
    pub fn new(width: u16, rows: u16) -> Self {
        Self::from_rng(width, rows, StdRng::from_os_rng())
    }

    /// Create an effect with a fixed seed (deterministic, for tests).
    pub fn with_seed(width: u16, rows: u16, seed: u64) -> Self {
        Self::from_rng(width, rows, StdRng::seed_from_u64(seed))
    }

    fn from_rng(width: u16, rows: u16, rng: StdRng) -> Self {
        Self {
            columns: vec![1; width as usize],
            rows: u32::from(rows),
            rng,
        }
    }

    /// Advance every column by one row.
    ///
    /// A column whose head has fallen past the bottom edge is reset to the
    /// top with probability `1 - RESET_KEEP` per tick, so the columns
    /// desynchronize instead of restarting in lockstep.
    pub fn tick(&mut self) {
        for head in &mut self.columns {
            if *head > self.rows && self.rng.random::<f32>() > RESET_KEEP {
                *head = 0;
            }
            *head += 1;
        }
    }

    /// Head row per column. Heads beyond `rows()` are off-screen.
    pub fn columns(&self) -> &[u32] {
        &self.columns
    }

    /// Grid height in rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Grid width in columns.
    pub fn width(&self) -> u16 {
        self.columns.len() as u16
    }

    /// A random glyph from the effect's character set.
    pub fn glyph(&mut self) -> char {
        let idx = self.rng.random_range(0..GLYPHS.len());
        GLYPHS[idx] as char
    }

    /// Resize the grid, preserving existing column phases where possible.
    pub fn resize(&mut self, width: u16, rows: u16) {
        self.columns.resize(width as usize, 1);
        self.rows = u32::from(rows);
    }
}

/// Owner of at most one [`RainEffect`].
///
/// The toggle contract: attach when detached, detach when attached. Because
/// the effect lives in an `Option`, attaching twice cannot stack a second
/// instance, and detaching drops the only one there is.
#[derive(Debug, Default)]
pub struct RainSurface {
    effect: Option<RainEffect>,
}

impl RainSurface {
    /// An empty (detached) surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle the effect. Returns `true` if it is now attached.
    pub fn toggle(&mut self, width: u16, rows: u16) -> bool {
        if self.effect.take().is_some() {
            log::debug!("rain effect detached");
            false
        } else {
            log::debug!("rain effect attached ({width}x{rows})");
            self.effect = Some(RainEffect::new(width, rows));
            true
        }
    }

    /// Whether an effect is currently attached.
    pub fn is_attached(&self) -> bool {
        self.effect.is_some()
    }

    /// Advance the effect by one tick, if attached.
    pub fn tick(&mut self) {
        if let Some(effect) = self.effect.as_mut() {
            effect.tick();
        }
    }

    /// Mutable access to the attached effect, for rendering.
    pub fn effect_mut(&mut self) -> Option<&mut RainEffect> {
        self.effect.as_mut()
    }

    /// Resize the attached effect, if any.
    pub fn resize(&mut self, width: u16, rows: u16) {
        if let Some(effect) = self.effect.as_mut() {
            effect.resize(width, rows);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_effect_starts_every_column_at_one() {
        let effect = RainEffect::with_seed(8, 10, 42);
        assert_eq!(effect.columns(), &[1; 8]);
    }

    #[test]
    fn tick_advances_on_screen_columns_by_one() {
        let mut effect = RainEffect::with_seed(8, 10, 42);
        effect.tick();
        // All heads are still on screen, so no resets are possible yet.
        assert_eq!(effect.columns(), &[2; 8]);
    }

    #[test]
    fn same_seed_is_deterministic() {
        let mut a = RainEffect::with_seed(16, 6, 7);
        let mut b = RainEffect::with_seed(16, 6, 7);
        for _ in 0..500 {
            a.tick();
            b.tick();
        }
        assert_eq!(a.columns(), b.columns());
    }

    #[test]
    fn columns_eventually_reset() {
        let mut effect = RainEffect::with_seed(32, 4, 1);
        for _ in 0..10_000 {
            effect.tick();
        }
        // A column that never reset would sit at exactly 10_001.
        let min = effect.columns().iter().min().copied().unwrap_or(0);
        assert!(min < 10_001, "no column ever reset");
    }

    #[test]
    fn reset_restarts_from_the_top() {
        let mut effect = RainEffect::with_seed(32, 4, 1);
        for _ in 0..10_000 {
            effect.tick();
        }
        for &head in effect.columns() {
            assert!(head >= 1);
        }
    }

    #[test]
    fn glyphs_come_from_the_character_set() {
        let mut effect = RainEffect::with_seed(1, 1, 3);
        for _ in 0..100 {
            let g = effect.glyph();
            assert!(GLYPHS.contains(&(g as u8)));
        }
    }

    #[test]
    fn resize_preserves_phases_and_extends_with_fresh_columns() {
        let mut effect = RainEffect::with_seed(4, 10, 9);
        for _ in 0..5 {
            effect.tick();
        }
        let before = effect.columns()[0];
        effect.resize(6, 12);
        assert_eq!(effect.width(), 6);
        assert_eq!(effect.rows(), 12);
        assert_eq!(effect.columns()[0], before);
        assert_eq!(effect.columns()[5], 1);
    }

    #[test]
    fn surface_toggle_alternates_attachment() {
        let mut surface = RainSurface::new();
        assert!(!surface.is_attached());
        assert!(surface.toggle(10, 5));
        assert!(surface.is_attached());
        assert!(!surface.toggle(10, 5));
        assert!(!surface.is_attached());
    }

    #[test]
    fn double_toggle_returns_to_detached_with_nothing_running() {
        let mut surface = RainSurface::new();
        surface.toggle(10, 5);
        surface.toggle(10, 5);
        assert!(surface.effect_mut().is_none());
        // Ticking a detached surface is a no-op, not a panic.
        surface.tick();
    }

    #[test]
    fn reattach_creates_a_fresh_effect() {
        let mut surface = RainSurface::new();
        surface.toggle(4, 5);
        for _ in 0..3 {
            surface.tick();
        }
        surface.toggle(4, 5);
        surface.toggle(4, 5);
        let effect = surface.effect_mut().unwrap();
        assert_eq!(effect.columns(), &[1; 4]);
    }
}

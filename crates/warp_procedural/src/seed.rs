//! # Effect Seeds
//!
//! A single root seed from which every random stream of the effect is
//! derived, so a seeded run can be replayed exactly.

/// Root seed for one warp effect instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EffectSeed(u64);

impl EffectSeed {
    /// Purpose tag for the star spawning stream.
    pub const STARS: u64 = 0x5354_4152;
    /// Purpose tag for the camera shake stream.
    pub const SHAKE: u64 = 0x5348_414B;

    /// Creates a new seed.
    #[inline]
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self(seed)
    }

    /// Creates a seed from the system clock.
    ///
    /// Falls back to [`EffectSeed::default`] if the clock reads before the
    /// Unix epoch.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_clock() -> Self {
        use std::time::{SystemTime, UNIX_EPOCH};

        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| Self(d.as_nanos() as u64))
            .unwrap_or_default()
    }

    /// Returns the raw seed value.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Seed of the stream tagged `stream` ([`Self::STARS`] or
    /// [`Self::SHAKE`]).
    ///
    /// Star births and shake reseeds draw from separate streams, so adding
    /// a shake reseed never shifts the stars a seed produces.
    #[inline]
    #[must_use]
    pub const fn derive(self, stream: u64) -> Self {
        // splitmix64 finalizer over seed + tag
        let mut z = self.0.wrapping_add(stream.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        Self(z ^ (z >> 31))
    }
}

impl Default for EffectSeed {
    fn default() -> Self {
        Self(0x5741_5250_5350_4545)
    }
}

impl From<u64> for EffectSeed {
    fn from(seed: u64) -> Self {
        Self::new(seed)
    }
}

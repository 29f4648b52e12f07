//! Core units, constants, and shared primitives for the solar travel simulator workspace.

/// Physical and calendar constants. Distances are in AU and times in Julian years unless stated otherwise.
pub mod constants {
    /// Kilometres per astronomical unit.
    pub const AU_KM: f64 = 149_597_870.7;
    /// Gigametres per astronomical unit.
    pub const AU_GM: f64 = 149.597_870_7;
    /// Days per Julian year.
    pub const DAYS_PER_YEAR: f64 = 365.25;
    /// Seconds per Julian year.
    pub const SECONDS_PER_YEAR: f64 = 3.155_76e7;
}

/// Basic unit conversion helpers.
pub mod units {
    use super::constants::{AU_GM, AU_KM, SECONDS_PER_YEAR};

    /// Convert kilometres per second to astronomical units per Julian year.
    #[inline]
    pub fn kms_to_au_per_year(v: f64) -> f64 {
        v * (SECONDS_PER_YEAR / AU_KM)
    }

    /// Convert astronomical units per Julian year to kilometres per second.
    #[inline]
    pub fn au_per_year_to_kms(v: f64) -> f64 {
        v * (AU_KM / SECONDS_PER_YEAR)
    }

    /// Convert gigametres to astronomical units.
    #[inline]
    pub fn gm_to_au(v: f64) -> f64 {
        v / AU_GM
    }
}

/// Lightweight time utilities shared across crates.
pub mod time {
    use super::constants::DAYS_PER_YEAR;

    /// Convert Julian years to days.
    #[inline]
    pub fn years_to_days(years: f64) -> f64 {
        years * DAYS_PER_YEAR
    }

    /// Convert days to Julian years.
    #[inline]
    pub fn days_to_years(days: f64) -> f64 {
        days / DAYS_PER_YEAR
    }
}

/// Minimal helpers for in-plane `[f64; 2]` math.
pub mod vector {
    /// Alias for a 2D vector in the orbital plane.
    pub type Vector2 = [f64; 2];

    /// Euclidean norm of a vector.
    #[inline]
    pub fn norm(v: &Vector2) -> f64 {
        v[0].hypot(v[1])
    }

    /// Vector addition.
    #[inline]
    pub fn add(a: &Vector2, b: &Vector2) -> Vector2 {
        [a[0] + b[0], a[1] + b[1]]
    }

    /// Vector subtraction.
    #[inline]
    pub fn sub(a: &Vector2, b: &Vector2) -> Vector2 {
        [a[0] - b[0], a[1] - b[1]]
    }

    /// Scale a vector by a scalar.
    #[inline]
    pub fn scale(v: &Vector2, s: f64) -> Vector2 {
        [v[0] * s, v[1] * s]
    }

    /// Linear interpolation from `a` (at 0) to `b` (at 1).
    #[inline]
    pub fn lerp(a: &Vector2, b: &Vector2, fraction: f64) -> Vector2 {
        add(a, &scale(&sub(b, a), fraction))
    }
}

//! Hardware calculator: measurement in, part counts out.
//!
//! All constants are empirical offsets verified against installed rails;
//! do not "clean them up".

/// Mounting mode selected from the menu. Decides which mechanical offset
/// is subtracted from the raw measurement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Curtains gather towards the center.
    Center,
    /// Curtains travel left-to-right.
    LeftRight,
}

impl Mode {
    /// Fixed mechanical offset in centimeters.
    pub fn offset_cm(self) -> f64 {
        match self {
            Mode::Center => 15.2,
            Mode::LeftRight => 11.6,
        }
    }

    /// Human-readable label shown in menus and result cards.
    pub fn label(self) -> &'static str {
        match self {
            Mode::Center => "К центру",
            Mode::LeftRight => "Слева-Направо",
        }
    }
}

/// Result of one calculation. Fully determined by `(mode, x)`; immutable.
#[derive(Clone, Debug, PartialEq)]
pub struct Calculation {
    pub mode: Mode,
    /// Raw measurement X in centimeters.
    pub x: f64,
    /// Working length L, rounded to one decimal for display.
    pub working_length: f64,
    /// Number of rail segments N, at least 1.
    pub segments: u64,
    /// Per-segment length S, rounded to one decimal.
    pub segment_length: f64,
    pub runners: u64,
    pub hooks: u64,
    pub mounts: u64,
}

/// Pure calculator. `x` must already be validated positive by the parser.
pub fn calc(mode: Mode, x: f64) -> Calculation {
    // Negative working length clamps to zero instead of erroring: a rail
    // shorter than the offset still gets a (degenerate) answer.
    let l = (x - mode.offset_cm()).max(0.0);

    let segments = ceil_count(l / 300.0).max(1);
    let segment_length = round1(l / segments as f64);

    let runners = even_up(ceil_count(x / 8.0));
    let hooks = runners + 10;
    let mounts = ceil_count(x / 100.0) + 1;

    Calculation {
        mode,
        x,
        working_length: round1(l),
        segments,
        segment_length,
        runners,
        hooks,
        mounts,
    }
}

/// Counts come from f64 ceilings. Lengths have no upper bound, so the
/// cast must saturate well below `u64::MAX`: the `+ 1` adjustments on
/// runners and mounts stay safe even for absurd measurements.
const MAX_COUNT: f64 = (1u64 << 62) as f64;

fn ceil_count(v: f64) -> u64 {
    v.ceil().min(MAX_COUNT) as u64
}

/// Round up to the next even number. Runners are installed in symmetric
/// pairs, so the count is always even.
pub fn even_up(n: u64) -> u64 {
    if n % 2 == 0 {
        n
    } else {
        n + 1
    }
}

/// One-decimal rounding, ties away from zero.
fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatting::REFERENCE_LENGTHS;

    #[test]
    fn center_404_matches_verified_values() {
        let c = calc(Mode::Center, 404.0);
        assert_eq!(c.working_length, 388.8);
        assert_eq!(c.segments, 2);
        assert_eq!(c.segment_length, 194.4);
        assert_eq!(c.runners, 52);
        assert_eq!(c.hooks, 62);
        assert_eq!(c.mounts, 6);
    }

    #[test]
    fn left_right_404_only_changes_working_length() {
        let c = calc(Mode::LeftRight, 404.0);
        assert_eq!(c.working_length, 392.4);
        assert_eq!(c.segments, 2);
        assert_eq!(c.segment_length, 196.2);
        // Runner/hook/mount counts depend only on X.
        assert_eq!(c.runners, 52);
        assert_eq!(c.hooks, 62);
        assert_eq!(c.mounts, 6);
    }

    #[test]
    fn center_202_fits_in_one_segment() {
        let c = calc(Mode::Center, 202.0);
        assert_eq!(c.working_length, 186.8);
        assert_eq!(c.segments, 1);
        assert_eq!(c.segment_length, 186.8);
        assert_eq!(c.runners, 26);
        assert_eq!(c.hooks, 36);
        assert_eq!(c.mounts, 4);
    }

    #[test]
    fn rail_shorter_than_offset_clamps_to_zero() {
        let c = calc(Mode::Center, 10.0);
        assert_eq!(c.working_length, 0.0);
        assert_eq!(c.segments, 1);
        assert_eq!(c.segment_length, 0.0);
        assert_eq!(c.runners, 2);
        assert_eq!(c.hooks, 12);
        assert_eq!(c.mounts, 2);
    }

    #[test]
    fn invariants_hold_over_reference_lengths() {
        for mode in [Mode::Center, Mode::LeftRight] {
            for x in REFERENCE_LENGTHS {
                let c = calc(mode, x);
                assert!(c.segments >= 1, "x={x}");
                assert!(c.segment_length >= 0.0, "x={x}");
                assert_eq!(c.runners % 2, 0, "x={x}");
                assert_eq!(c.hooks, c.runners + 10, "x={x}");
                assert!(c.mounts >= 1, "x={x}");
            }
        }
    }

    #[test]
    fn huge_lengths_keep_the_count_invariants() {
        // No upper bound on X: a kilometer-scale (or worse) length must
        // still produce even runners without overflowing.
        let c = calc(Mode::Center, 1.0e12);
        assert_eq!(c.runners, 125_000_000_000);
        assert_eq!(c.runners % 2, 0);
        assert_eq!(c.hooks, c.runners + 10);
        assert_eq!(c.mounts, 10_000_000_001);

        let extreme = calc(Mode::LeftRight, f64::MAX);
        assert_eq!(extreme.runners % 2, 0);
        assert_eq!(extreme.hooks, extreme.runners + 10);
        assert!(extreme.mounts >= 1);
        assert!(extreme.segments >= 1);
    }

    #[test]
    fn calc_is_deterministic() {
        assert_eq!(calc(Mode::Center, 550.0), calc(Mode::Center, 550.0));
    }

    #[test]
    fn even_up_rounds_odd_counts_only() {
        assert_eq!(even_up(50), 50);
        assert_eq!(even_up(51), 52);
        assert_eq!(even_up(0), 0);
        assert_eq!(even_up(1), 2);
    }
}

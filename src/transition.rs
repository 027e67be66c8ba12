// src/transition.rs
//
// Start→end marker travel for one displayed drive. Pure timing math; the
// GUI feeds it seconds since the drive was shown.

use crate::config::options::TransitionOptions;

/// CSS `ease-in-out` = cubic-bezier(0.42, 0, 0.58, 1).
const P1X: f64 = 0.42;
const P2X: f64 = 0.58;

fn bezier(t: f64, p1: f64, p2: f64) -> f64 {
    let u = 1.0 - t;
    3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t
}

fn bezier_dx(t: f64, p1: f64, p2: f64) -> f64 {
    let u = 1.0 - t;
    3.0 * u * u * p1 + 6.0 * u * t * (p2 - p1) + 3.0 * t * t * (1.0 - p2)
}

/// Eased progress for linear progress `x` in [0, 1].
pub fn ease_in_out(x: f64) -> f64 {
    let x = x.clamp(0.0, 1.0);
    if x == 0.0 || x == 1.0 {
        return x;
    }

    // Solve bezier_x(t) = x (Newton, then bisection if the slope flattens).
    let mut t = x;
    for _ in 0..8 {
        let err = bezier(t, P1X, P2X) - x;
        if err.abs() < 1e-7 {
            return bezier(t, 0.0, 1.0);
        }
        let d = bezier_dx(t, P1X, P2X);
        if d.abs() < 1e-6 {
            break;
        }
        t -= err / d;
    }

    let (mut lo, mut hi) = (0.0, 1.0);
    t = x;
    while hi - lo > 1e-7 {
        if bezier(t, P1X, P2X) < x { lo = t; } else { hi = t; }
        t = (lo + hi) / 2.0;
    }
    bezier(t, 0.0, 1.0)
}

/// What the field should show at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    /// End-marker position, in field percent.
    pub end_marker: Option<f64>,
    /// End-marker opacity, 0..=1.
    pub end_opacity: f32,
    /// Info panel and touchdown banner are visible.
    pub revealed: bool,
    /// Still moving; caller should keep repainting.
    pub animating: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MarkerTransition {
    start: Option<f64>,
    end: Option<f64>,
    delay: f64,
    duration: f64,
    fade_in: f64,
}

impl MarkerTransition {
    pub fn new(start: Option<f64>, end: Option<f64>, opts: &TransitionOptions) -> Self {
        Self {
            start,
            end,
            delay: opts.delay.as_secs_f64(),
            duration: opts.duration.as_secs_f64(),
            fade_in: opts.fade_in,
        }
    }

    /// Seconds from display until the reveal.
    pub fn total(&self) -> f64 { self.delay + self.duration }

    /// Linear progress of the travel, 0..=1.
    fn linear(&self, elapsed: f64) -> f64 {
        if self.duration <= 0.0 {
            return if elapsed >= self.delay { 1.0 } else { 0.0 };
        }
        ((elapsed - self.delay) / self.duration).clamp(0.0, 1.0)
    }

    pub fn frame(&self, elapsed: f64) -> Frame {
        let revealed = elapsed >= self.total();
        let x = self.linear(elapsed);

        let (end_marker, end_opacity) = match (self.start, self.end) {
            (Some(s), Some(e)) => {
                let pos = s + (e - s) * ease_in_out(x);
                let opacity = if self.fade_in <= 0.0 { 1.0 } else { (x / self.fade_in).min(1.0) };
                (Some(pos), opacity as f32)
            }
            // Nothing to travel from: show the end spot as-is.
            (None, Some(e)) => (Some(e), 1.0),
            (_, None) => (None, 0.0),
        };

        Frame { end_marker, end_opacity, revealed, animating: !revealed }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn opts() -> TransitionOptions { TransitionOptions::default() }

    #[test]
    fn easing_endpoints_and_midpoint() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(1.0), 1.0);
        assert!((ease_in_out(0.5) - 0.5).abs() < 1e-6);
        // Slow start, slow finish.
        assert!(ease_in_out(0.1) < 0.1);
        assert!(ease_in_out(0.9) > 0.9);
    }

    #[test]
    fn easing_is_monotonic() {
        let mut prev = 0.0;
        for i in 1..=100 {
            let y = ease_in_out(i as f64 / 100.0);
            assert!(y >= prev, "{y} < {prev} at {i}");
            prev = y;
        }
    }

    #[test]
    fn marker_starts_at_start_and_lands_on_end() {
        let tr = MarkerTransition::new(Some(20.0), Some(70.0), &opts());

        let f = tr.frame(0.0);
        assert_eq!(f.end_marker, Some(20.0));
        assert_eq!(f.end_opacity, 0.0);
        assert!(!f.revealed && f.animating);

        let f = tr.frame(0.1 + 1.5);
        let mid = f.end_marker.unwrap();
        assert!(mid > 20.0 && mid < 70.0);
        assert_eq!(f.end_opacity, 1.0);

        let f = tr.frame(tr.total());
        assert_eq!(f.end_marker, Some(70.0));
        assert!(f.revealed && !f.animating);
    }

    #[test]
    fn fades_in_over_first_tenth() {
        let tr = MarkerTransition::new(Some(10.0), Some(90.0), &opts());
        let f = tr.frame(0.1 + 0.15);
        assert!((f.end_opacity - 0.5).abs() < 1e-4);
    }

    #[test]
    fn missing_start_shows_end_directly() {
        let tr = MarkerTransition::new(None, Some(42.0), &opts());
        let f = tr.frame(0.0);
        assert_eq!(f.end_marker, Some(42.0));
        assert_eq!(f.end_opacity, 1.0);
    }

    #[test]
    fn zero_duration_reveals_after_delay() {
        let o = TransitionOptions { delay: Duration::ZERO, duration: Duration::ZERO, fade_in: 0.1 };
        let tr = MarkerTransition::new(Some(10.0), Some(30.0), &o);
        let f = tr.frame(0.0);
        assert_eq!(f.end_marker, Some(30.0));
        assert!(f.revealed);
    }
}

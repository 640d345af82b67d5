//! Discrete-event root finding.

use crate::error::EphemerisError;

/// Bisection stops once the bracket is narrower than this (about 0.4 s).
const TOLERANCE_DAYS: f64 = 5e-6;

/// Finds the instants at which a discrete-valued function changes value.
///
/// `f` is sampled every `step_days` over `(start_jd, end_jd]`; each change
/// between neighbouring samples is bisected down to [`TOLERANCE_DAYS`] and
/// reported as `(jd, new_value)` in chronological order. The step must be
/// short enough that `f` changes at most once per step, otherwise changes
/// are missed.
///
/// An empty or inverted interval yields no events.
///
/// # Errors
///
/// Returns [`EphemerisError::InvalidStep`] if `step_days` is not finite and
/// positive.
pub fn find_discrete<F>(
    start_jd: f64,
    end_jd: f64,
    step_days: f64,
    f: F,
) -> Result<Vec<(f64, u8)>, EphemerisError>
where
    F: Fn(f64) -> u8,
{
    if !step_days.is_finite() || step_days <= 0.0 {
        return Err(EphemerisError::InvalidStep { step: step_days });
    }
    let mut events = Vec::new();
    if end_jd <= start_jd {
        return Ok(events);
    }

    let mut t0 = start_jd;
    let mut v0 = f(t0);
    while t0 < end_jd {
        let t1 = (t0 + step_days).min(end_jd);
        let v1 = f(t1);
        if v1 != v0 {
            let (mut lo, mut hi) = (t0, t1);
            while hi - lo > TOLERANCE_DAYS {
                let mid = 0.5 * (lo + hi);
                if f(mid) == v0 {
                    lo = mid;
                } else {
                    hi = mid;
                }
            }
            events.push((hi, v1));
        }
        t0 = t1;
        v0 = v1;
    }
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn staircase(t: f64) -> u8 {
        // Changes value at every multiple of 2.5.
        (t / 2.5).floor() as u8
    }

    #[test]
    fn finds_every_step() {
        let events = find_discrete(0.0, 10.0, 1.0, staircase).unwrap();
        let values: Vec<u8> = events.iter().map(|&(_, v)| v).collect();
        assert_eq!(values, vec![1, 2, 3, 4]);
        for (i, &(t, _)) in events.iter().enumerate() {
            assert_abs_diff_eq!(t, 2.5 * (i + 1) as f64, epsilon = 1e-5);
        }
    }

    #[test]
    fn chronological() {
        let events = find_discrete(0.0, 10.0, 0.3, staircase).unwrap();
        assert!(events.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn constant_function_has_no_events() {
        let events = find_discrete(0.0, 100.0, 1.0, |_| 3).unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn inverted_interval_is_empty() {
        let events = find_discrete(10.0, 0.0, 1.0, staircase).unwrap();
        assert!(events.is_empty());
        let events = find_discrete(5.0, 5.0, 1.0, staircase).unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn partial_last_step() {
        // The final sample lands exactly on the end of the interval.
        let events = find_discrete(0.0, 2.6, 1.0, staircase).unwrap();
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn rejects_bad_step() {
        assert_eq!(
            find_discrete(0.0, 1.0, 0.0, staircase).unwrap_err(),
            EphemerisError::InvalidStep { step: 0.0 }
        );
        assert!(find_discrete(0.0, 1.0, f64::NAN, staircase).is_err());
        assert!(find_discrete(0.0, 1.0, -1.0, staircase).is_err());
    }
}

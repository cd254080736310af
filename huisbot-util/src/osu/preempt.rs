const AR_MID: f64 = 5.0;

const PREEMPT_MIN: f64 = 1800.0;
const PREEMPT_MID: f64 = 1200.0;
const PREEMPT_MAX: f64 = 450.0;

/// Time in milliseconds that a hit object is visible before it must be hit.
#[inline]
pub fn ar_to_ms(ar: f64) -> f64 {
    if ar > AR_MID {
        PREEMPT_MID - (PREEMPT_MID - PREEMPT_MAX) * (ar - AR_MID) / AR_MID
    } else if ar < AR_MID {
        PREEMPT_MID + (PREEMPT_MIN - PREEMPT_MID) * (AR_MID - ar) / AR_MID
    } else {
        PREEMPT_MID
    }
}

/// Approach rate for the given preempt in milliseconds.
///
/// For `ms > 1200` the offset is added onto AR 5 instead of subtracted so
/// this is only the inverse of [`ar_to_ms`] for `ms <= 1200`.
#[inline]
pub fn ms_to_ar(ms: i32) -> f64 {
    let ms = f64::from(ms);

    if ms == PREEMPT_MID {
        AR_MID
    } else if ms > PREEMPT_MID {
        AR_MID - AR_MID * (PREEMPT_MID - ms) / (PREEMPT_MIN - PREEMPT_MID)
    } else {
        AR_MID + AR_MID * (PREEMPT_MID - ms) / (PREEMPT_MID - PREEMPT_MAX)
    }
}

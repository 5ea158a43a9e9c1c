/// Quadratic ease-in-out in the classic Penner form: `t` is the elapsed
/// tick, `b` the start value, `c` the change and `d` the duration in ticks.
#[inline]
pub fn ease_in_out_quad(t: f64, b: f64, c: f64, d: f64) -> f64 {
    if d <= 0.0 {
        return b + c;
    }
    let mut t = t / (d / 2.0);
    if t < 1.0 {
        return c / 2.0 * t * t + b;
    }
    t -= 1.0;
    -c / 2.0 * (t * (t - 2.0) - 1.0) + b
}

#[inline]
pub fn interpolate(from: f64, to: f64, progress: f64) -> f64 {
    from + (to - from) * progress
}

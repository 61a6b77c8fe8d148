//! Frame-rate independent easing toward a target value.

const SMALL_NUMBER: f32 = 1.0e-8;

/// Exponential approach: move a fraction `dt * speed` of the remaining
/// distance toward `target`, never overshooting.
///
/// A non-positive `speed` snaps straight to the target.
pub fn interp_to(current: f32, target: f32, dt: f32, speed: f32) -> f32 {
    if speed <= 0.0 {
        return target;
    }
    let distance = target - current;
    if distance * distance < SMALL_NUMBER {
        return target;
    }
    current + distance * (dt * speed).clamp(0.0, 1.0)
}

/// Constant-rate approach: move at most `dt * speed` units toward `target`.
///
/// A non-positive `speed` holds the current value.
pub fn interp_constant_to(current: f32, target: f32, dt: f32, speed: f32) -> f32 {
    let distance = target - current;
    if distance * distance < SMALL_NUMBER {
        return target;
    }
    let step = (speed * dt).max(0.0);
    current + distance.clamp(-step, step)
}

/// Clamp `value` into `[min, max]` without panicking on inverted or NaN
/// bounds. An inverted range yields `min` below it and `max` otherwise.
pub fn clamp_between(value: f32, min: f32, max: f32) -> f32 {
    if value < min {
        min
    } else if value < max {
        value
    } else {
        max
    }
}

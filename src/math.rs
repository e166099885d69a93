//! Math utility functions.

use num_traits::Float;

use crate::Component;

/// Floored modulo. Unlike `%`, the result has the sign of `m`, so negative
/// values wrap around into `[0, m)`.
pub fn modulo<T: Float>(x: T, m: T) -> T {
    ((x % m) + m) % m
}

/// Linear interpolation from `a` to `b`.
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

/// Wrap a circular value (hue) into `[0, 1)`. Non-finite values map to 0.
pub fn wrap_unit(value: Component) -> Component {
    if !value.is_finite() {
        return 0.0;
    }
    modulo(value, 1.0)
}

/// Clamp a value into `[0, 1]`. NaN maps to 0.
pub fn clamp_unit(value: Component) -> Component {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Scale a unit value to a byte, rounding half away from zero.
pub fn unit_to_byte(value: Component) -> u8 {
    (clamp_unit(value) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modulo_wraps_negative_values() {
        assert_component_eq!(modulo(-0.25 as Component, 1.0), 0.75);
        assert_component_eq!(modulo(1.25 as Component, 1.0), 0.25);
        assert_component_eq!(modulo(-7.0 as Component, 6.0), 5.0);
    }

    #[test]
    fn wrap_unit_stays_below_one() {
        assert_eq!(wrap_unit(1.0), 0.0);
        assert_eq!(wrap_unit(0.0), 0.0);
        assert_component_eq!(wrap_unit(1.5), 0.5);
        assert_component_eq!(wrap_unit(-0.05), 0.95);
        assert_eq!(wrap_unit(Component::NAN), 0.0);
        assert_eq!(wrap_unit(Component::INFINITY), 0.0);

        let tiny = wrap_unit(-Component::EPSILON / 4.0);
        assert!((0.0..1.0).contains(&tiny));
    }

    #[test]
    fn clamp_unit_saturates() {
        assert_eq!(clamp_unit(-0.2), 0.0);
        assert_eq!(clamp_unit(2.0), 1.0);
        assert_eq!(clamp_unit(0.4), 0.4);
        assert_eq!(clamp_unit(Component::NAN), 0.0);
    }

    #[test]
    fn lerp_basic() {
        assert_component_eq!(lerp(0.1 as Component, 0.5, 0.5), 0.3);
        assert_eq!(lerp(2.0 as Component, 4.0, 0.0), 2.0);
        assert_eq!(lerp(2.0 as Component, 4.0, 1.0), 4.0);
    }
}

use glam::Vec3;

/// Rescales `movement` to unit length when it is longer than 1.
///
/// Shorter vectors (including zero) pass through unchanged, so diagonal input
/// is not faster than straight input while partial input stays partial.
pub fn normalize_movement(movement: Vec3) -> Vec3 {
    if movement.length() > 1.0 {
        movement.normalize()
    } else {
        movement
    }
}

/// `position + movement * speed * dt`.
#[inline]
pub fn integrate(position: Vec3, movement: Vec3, speed: f32, dt: f32) -> Vec3 {
    position + movement * speed * dt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_vectors_become_unit_length() {
        let n = normalize_movement(Vec3::new(1.0, 1.0, 0.0));
        assert!((n.length() - 1.0).abs() < 1e-6);
        assert!((n.x - n.y).abs() < 1e-6);

        let n = normalize_movement(Vec3::new(0.0, -3.0, 0.0));
        assert_eq!(n, Vec3::new(0.0, -1.0, 0.0));
    }

    #[test]
    fn short_vectors_pass_through() {
        for v in [
            Vec3::ZERO,
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, -1.0, 0.0),
            Vec3::new(0.3, 0.4, 0.0),
        ] {
            assert_eq!(normalize_movement(v), v);
        }
    }

    #[test]
    fn integrate_moves_along_movement() {
        let p = integrate(Vec3::new(1.0, 2.0, 0.0), Vec3::new(0.0, 1.0, 0.0), 2.0, 0.5);
        assert_eq!(p, Vec3::new(1.0, 3.0, 0.0));
    }

    #[test]
    fn integrate_is_monotonic_in_dt_and_speed() {
        let start = Vec3::ZERO;
        let dir = Vec3::new(0.0, -1.0, 0.0);
        let mut last = start.y;
        for step in 0..20 {
            let dt = step as f32 * 0.01;
            let y = integrate(start, dir, 1.5, dt).y;
            assert!(y <= last);
            last = y;
        }

        let slow = integrate(start, dir, 0.5, 0.1).y;
        let fast = integrate(start, dir, 2.0, 0.1).y;
        assert!(fast < slow);
    }

    #[test]
    fn zero_dt_or_speed_does_not_move() {
        let p = Vec3::new(0.5, 0.5, 0.0);
        let m = Vec3::new(1.0, 0.0, 0.0);
        assert_eq!(integrate(p, m, 1.0, 0.0), p);
        assert_eq!(integrate(p, m, 0.0, 1.0), p);
    }
}

use starfield::starfield::{
    StarField, MAX_STAR_OPACITY, MAX_STAR_SIZE, MAX_TWINKLE_DELAY, MIN_STAR_OPACITY, MIN_STAR_SIZE,
};

#[test]
fn test_generated_stars_stay_in_range() {
    let field = StarField::generate(500, 390.0, 844.0, None);
    assert_eq!(field.len(), 500);

    for (i, star) in field.stars().iter().enumerate() {
        assert_eq!(star.id, i);
        assert!((0.0..390.0).contains(&star.x), "x out of range: {}", star.x);
        assert!((0.0..844.0).contains(&star.y), "y out of range: {}", star.y);
        assert!((MIN_STAR_SIZE..MAX_STAR_SIZE).contains(&star.size));
        assert!((MIN_STAR_OPACITY..=MAX_STAR_OPACITY).contains(&star.opacity));
        assert!((0.0..MAX_TWINKLE_DELAY).contains(&star.twinkle_delay));
    }
}

#[test]
fn test_same_seed_same_sky() {
    let a = StarField::generate(50, 640.0, 480.0, Some(3));
    let b = StarField::generate(50, 640.0, 480.0, Some(3));
    let c = StarField::generate(50, 640.0, 480.0, Some(4));
    assert_eq!(a.stars(), b.stars());
    assert_ne!(a.stars(), c.stars());
}

#[test]
fn test_empty_field() {
    let field = StarField::generate(0, 390.0, 844.0, Some(1));
    assert!(field.is_empty());
}

#[test]
fn test_projection_scales_to_target() {
    let field = StarField::generate(20, 400.0, 800.0, Some(11));
    for star in field.stars() {
        let (x, y) = field.project(star, 40.0, 50.0);
        assert!((0.0..40.0).contains(&x));
        assert!((0.0..50.0).contains(&y));
    }
}

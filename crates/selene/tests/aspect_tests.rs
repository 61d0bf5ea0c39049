use selene::aspects::{
    AspectCalculator, AspectKind, AspectSettings, RandomAspectPicker, CANNED_ASPECTS,
};
use selene::ephemeris::{BodyLongitudes, CelestialBody};
use selene::{compute_snapshot, CalendarDate, DetectedAspectPicker, SnapshotCalculator};

#[test]
fn test_find_aspects_j2000() {
    let lons = compute_snapshot(CalendarDate::new(2000, 1, 1)).longitudes;
    let aspects = AspectCalculator::default().find_aspects(&lons);

    let first = aspects.first().unwrap();
    assert_eq!(first.first, CelestialBody::Sun);
    assert_eq!(first.second, CelestialBody::Moon);
    assert_eq!(first.kind, AspectKind::Sextile);
    assert!((first.orb - 2.144).abs() < 1e-6);

    for pair in aspects.windows(2) {
        assert!(pair[0].orb <= pair[1].orb);
    }
    assert!(aspects.iter().any(|a| a.first == CelestialBody::Moon
        && a.second == CelestialBody::Jupiter
        && a.kind == AspectKind::Opposition));
}

#[test]
fn test_exact_square() {
    let lons = BodyLongitudes::from_fn(|body| match body {
        CelestialBody::Mars => 95.0,
        CelestialBody::Saturn => 5.0,
        other => 200.0 + other.index() as f64 * 37.0,
    });
    let aspects = AspectCalculator::new(AspectSettings::with_orb(0.5)).find_aspects(&lons);
    assert_eq!(aspects.len(), 1);
    assert_eq!(aspects[0].kind, AspectKind::Square);
    assert!((aspects[0].separation - 90.0).abs() < 1e-9);
}

#[test]
fn test_aspect_kind_names() {
    for kind in AspectKind::ALL {
        assert_eq!(AspectKind::from_name(kind.name()), Some(kind));
    }
    assert_eq!(AspectKind::from_name("TRINE"), Some(AspectKind::Trine));
    assert_eq!(AspectKind::from_name("quincunx"), None);
}

#[test]
fn test_random_picker_in_calculator() {
    let calc = SnapshotCalculator::new(None, Box::new(RandomAspectPicker::seeded(42)));
    let again = SnapshotCalculator::new(None, Box::new(RandomAspectPicker::seeded(42)));
    let date = CalendarDate::new(2000, 1, 1);

    let allowed: Vec<String> = CANNED_ASPECTS
        .iter()
        .map(|p| p.replace("{sun}", "Capricorn"))
        .collect();
    for _ in 0..10 {
        let a = calc.compute_snapshot(date);
        let b = again.compute_snapshot(date);
        assert_eq!(a.daily_aspect, b.daily_aspect);
        assert!(allowed.contains(&a.daily_aspect), "{}", a.daily_aspect);
        // Positions are unaffected by the picker.
        assert_eq!(a.longitudes, compute_snapshot(date).longitudes);
    }
}

#[test]
fn test_detected_picker_orb_setting() {
    let tight = SnapshotCalculator::new(
        None,
        Box::new(DetectedAspectPicker::new(AspectSettings::with_orb(1.0))),
    );
    // Tightest aspect on 2000-01-01 is 2.1° off exact.
    assert_eq!(
        tight.compute_snapshot(CalendarDate::new(2000, 1, 1)).daily_aspect,
        "No major aspects today"
    );
}

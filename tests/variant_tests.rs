use std::cell::Cell;

use accessible_shades::Error;
use accessible_shades::variant::{
    AcceptanceTest, Direction, MAX_CANDIDATES, MIN_STEP, SearchOptions, VariantRequest,
    WcagAcceptance, find_accessible_variant, find_accessible_variant_from,
    find_accessible_variant_with,
};
use accessible_shades::wcag::{ConformanceCheck, ContrastRequirements, Level, passes_wcag};

fn request(base: &str, level: Level, large: bool, direction: Direction) -> VariantRequest {
    VariantRequest::new(base, ContrastRequirements::new(level, large), direction)
}

#[test]
fn test_finds_first_passing_lighter_variant() {
    let req = request("#944B89", Level::Aa, false, Direction::Lighten);
    assert_eq!(find_accessible_variant(&req).unwrap(), "#f4eaf3");
}

#[test]
fn test_large_text_finds_closer_variants() {
    let lighter = request("#944B89", Level::Aa, true, Direction::Lighten);
    let darker = request("#944B89", Level::Aa, true, Direction::Darken);
    assert_eq!(find_accessible_variant(&lighter).unwrap(), "#dbb7d5");
    assert_eq!(find_accessible_variant(&darker).unwrap(), "#1e0f1b");
}

#[test]
fn test_known_variants() {
    let cases = [
        ("#336699", Level::Aa, false, Direction::Lighten, "#d9e6f2"),
        ("#777777", Level::Aa, false, Direction::Darken, "#040404"),
        ("#1a1a2e", Level::Aaa, false, Direction::Lighten, "#ababcf"),
        ("#eaeaea", Level::Aaa, false, Direction::Darken, "#444444"),
        ("#BADA55", Level::Aa, false, Direction::Darken, "#425112"),
        ("#ff0000", Level::Aa, true, Direction::Lighten, "#ffe5e5"),
    ];
    for (base, level, large, direction, expected) in cases {
        let req = request(base, level, large, direction);
        assert_eq!(
            find_accessible_variant(&req).unwrap(),
            expected,
            "{base} {level} large={large} {direction}"
        );
    }
}

#[test]
fn test_black_lightens_to_mid_gray() {
    let req = request("#000000", Level::Aa, false, Direction::Lighten);
    assert_eq!(find_accessible_variant(&req).unwrap(), "#808080");
}

#[test]
fn test_no_variant_reports_base_and_direction() {
    let req = request("#944B89", Level::Aaa, false, Direction::Darken);
    let err = find_accessible_variant(&req).unwrap_err();
    assert_eq!(
        err,
        Error::NoAccessibleVariant {
            base: "#944B89".to_string(),
            direction: Direction::Darken,
        }
    );
    assert_eq!(err.to_string(), "No accessible darken variant found for #944B89");
}

#[test]
fn test_cannot_darken_black_or_lighten_white() {
    let black = request("#000000", Level::Aa, true, Direction::Darken);
    let white = request("#ffffff", Level::Aa, true, Direction::Lighten);
    assert!(matches!(
        find_accessible_variant(&black),
        Err(Error::NoAccessibleVariant { .. })
    ));
    assert!(matches!(
        find_accessible_variant(&white),
        Err(Error::NoAccessibleVariant { .. })
    ));
}

#[test]
fn test_invalid_base_is_reported_before_search() {
    let req = request("#GGGGGG", Level::Aa, false, Direction::Lighten);
    assert_eq!(
        find_accessible_variant(&req),
        Err(Error::InvalidColorFormat("#GGGGGG".to_string()))
    );
}

#[test]
fn test_invalid_step_is_rejected() {
    let req = request("#336699", Level::Aa, false, Direction::Lighten);
    let options = SearchOptions { step: 0.0 };
    assert_eq!(
        find_accessible_variant_with(&req, &options, &WcagAcceptance),
        Err(Error::InvalidSearchStep(0.0))
    );
}

#[test]
fn test_coarser_step() {
    let req = request("#944B89", Level::Aa, false, Direction::Lighten);
    let options = SearchOptions::new(0.1).unwrap();
    assert_eq!(
        find_accessible_variant_with(&req, &options, &WcagAcceptance).unwrap(),
        "#f4eaf3"
    );
}

#[test]
fn test_fallback_used_when_steps_fail() {
    // Rejects every candidate except pure white
    let only_white = |candidate: &str, _: &VariantRequest| -> accessible_shades::Result<bool> {
        Ok(candidate == "#ffffff")
    };
    let req = request("#336699", Level::Aa, false, Direction::Lighten);
    assert_eq!(
        find_accessible_variant_with(&req, &SearchOptions::default(), &only_white).unwrap(),
        "#ffffff"
    );

    let req = request("#336699", Level::Aa, false, Direction::Darken);
    assert!(matches!(
        find_accessible_variant_with(&req, &SearchOptions::default(), &only_white),
        Err(Error::NoAccessibleVariant { .. })
    ));
}

struct CountingTest {
    calls: Cell<usize>,
}

impl AcceptanceTest for CountingTest {
    fn accepts(
        &self,
        _candidate: &str,
        _request: &VariantRequest,
    ) -> accessible_shades::Result<bool> {
        self.calls.set(self.calls.get() + 1);
        Ok(false)
    }
}

#[test]
fn test_search_is_bounded() {
    let test = CountingTest { calls: Cell::new(0) };
    let req = request("#808080", Level::Aaa, false, Direction::Lighten);
    let result = find_accessible_variant_with(&req, &SearchOptions::default(), &test);
    assert!(result.is_err());
    // 19 lightness steps plus the white fallback
    assert_eq!(test.calls.get(), 20);
}

#[test]
fn test_tiny_step_is_rejected() {
    for step in [1e-6, 1e-12, MIN_STEP / 2.0] {
        assert_eq!(SearchOptions::new(step), Err(Error::InvalidSearchStep(step)));
    }

    let test = CountingTest { calls: Cell::new(0) };
    let req = request("#808080", Level::Aaa, false, Direction::Lighten);
    let result = find_accessible_variant_with(&req, &SearchOptions { step: 1e-6 }, &test);
    assert_eq!(result, Err(Error::InvalidSearchStep(1e-6)));
    assert_eq!(test.calls.get(), 0);
}

#[test]
fn test_smallest_step_is_bounded() {
    let test = CountingTest { calls: Cell::new(0) };
    let req = request("#808080", Level::Aaa, false, Direction::Lighten);
    let options = SearchOptions::new(MIN_STEP).unwrap();
    assert!(find_accessible_variant_with(&req, &options, &test).is_err());
    // Every step plus the fallback
    assert!(test.calls.get() <= MAX_CANDIDATES + 1);
    assert_eq!(test.calls.get(), 100);
}

#[test]
fn test_search_from_skips_smaller_factors() {
    let test = CountingTest { calls: Cell::new(0) };
    let req = request("#808080", Level::Aaa, false, Direction::Lighten);
    let result = find_accessible_variant_from(&req, &SearchOptions::default(), &test, 0.5);
    assert!(result.is_err());
    // 0.50 through 0.95, then the fallback
    assert_eq!(test.calls.get(), 11);

    let req = request("#BADA55", Level::Aa, false, Direction::Darken);
    assert_eq!(
        find_accessible_variant_from(&req, &SearchOptions::default(), &WcagAcceptance, 0.5)
            .unwrap(),
        "#202709"
    );
}

#[test]
fn test_returned_variant_always_passes() {
    let bases = [
        "#944B89", "#336699", "#777777", "#000000", "#ffffff", "#808080", "#ff0000", "#1a1a2e",
        "#eaeaea", "#3366CC", "#BADA55", "#00ff00", "#0000ff", "#ffff00",
    ];
    for base in bases {
        for level in [Level::Aa, Level::Aaa] {
            for large in [false, true] {
                for direction in [Direction::Lighten, Direction::Darken] {
                    let req = request(base, level, large, direction);
                    if let Ok(variant) = find_accessible_variant(&req) {
                        let check = ConformanceCheck::with_requirements(
                            variant.clone(),
                            base,
                            req.requirements,
                        );
                        assert!(passes_wcag(&check).unwrap(), "{variant} for {base}");
                    }
                }
            }
        }
    }
}

#[test]
fn test_direction_display() {
    assert_eq!(Direction::Lighten.to_string(), "lighten");
    assert_eq!(Direction::Darken.fallback(), "#000000");
}

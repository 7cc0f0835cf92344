use accessible_shades::Error;
use accessible_shades::generate::{
    ExtendedPalette, NO_DARKER_VARIANT, NO_LIGHTER_VARIANT, Palette, PaletteRequest,
    generate_extended_palette, generate_palette, generate_palette_with, generate_palettes,
};
use accessible_shades::variant::SearchOptions;
use accessible_shades::wcag::{ConformanceCheck, ContrastRequirements, Level, passes_wcag};

fn extended(base: &str, level: Level, large: bool) -> ExtendedPalette {
    let request = PaletteRequest::new(base, ContrastRequirements::new(level, large));
    generate_extended_palette(&request, &SearchOptions::default()).unwrap()
}

fn is_hex(s: &str) -> bool {
    s.len() == 7 && s.starts_with('#') && s[1..].bytes().all(|b| b.is_ascii_hexdigit())
}

#[test]
fn test_palette_keeps_base_verbatim() {
    let palette =
        generate_palette(&PaletteRequest::new("#944B89", ContrastRequirements::default())).unwrap();
    assert_eq!(palette.base, "#944B89");
}

#[test]
fn test_palette_with_one_failed_direction() {
    let palette =
        generate_palette(&PaletteRequest::new("#944B89", ContrastRequirements::default())).unwrap();
    assert_eq!(palette.lighter, "#f4eaf3");
    assert_eq!(palette.darker, NO_DARKER_VARIANT);
    assert!(palette.has_lighter());
    assert!(!palette.has_darker());
}

#[test]
fn test_palette_with_both_directions() {
    let requirements = ContrastRequirements::new(Level::Aa, true);
    let palette = generate_palette(&PaletteRequest::new("#944B89", requirements)).unwrap();
    assert_eq!(palette.lighter, "#dbb7d5");
    assert_eq!(palette.darker, "#1e0f1b");
}

#[test]
fn test_palette_with_no_variants() {
    let requirements = ContrastRequirements::new(Level::Aaa, false);
    let palette = generate_palette(&PaletteRequest::new("#808080", requirements)).unwrap();
    assert_eq!(palette.lighter, NO_LIGHTER_VARIANT);
    assert_eq!(palette.darker, NO_DARKER_VARIANT);
}

#[test]
fn test_palette_rejects_malformed_base() {
    let result = generate_palette(&PaletteRequest::new("red", ContrastRequirements::default()));
    assert_eq!(result, Err(Error::InvalidColorFormat("red".to_string())));
}

#[test]
fn test_palette_rejects_invalid_step() {
    let request = PaletteRequest::new("#336699", ContrastRequirements::default());
    let result = generate_palette_with(&request, &SearchOptions { step: 1.5 });
    assert_eq!(result, Err(Error::InvalidSearchStep(1.5)));
}

#[test]
fn test_palette_fields_always_well_formed() {
    // Sample the RGB cube coarsely at every requirement combination
    for r in (0..=255u16).step_by(51) {
        for g in (0..=255u16).step_by(51) {
            for b in (0..=255u16).step_by(51) {
                let base = format!("#{:02X}{:02X}{:02X}", r, g, b);
                for level in [Level::Aa, Level::Aaa] {
                    for large in [false, true] {
                        let requirements = ContrastRequirements::new(level, large);
                        let palette =
                            generate_palette(&PaletteRequest::new(base.clone(), requirements))
                                .unwrap();
                        assert_eq!(palette.base, base);
                        assert!(is_hex(&palette.lighter) || palette.lighter == NO_LIGHTER_VARIANT);
                        assert!(is_hex(&palette.darker) || palette.darker == NO_DARKER_VARIANT);
                    }
                }
            }
        }
    }
}

#[test]
fn test_batch_preserves_order_and_isolates_errors() {
    let requirements = ContrastRequirements::default();
    let requests = vec![
        PaletteRequest::new("#944B89", requirements),
        PaletteRequest::new("#12", requirements),
        PaletteRequest::new("#000000", requirements),
    ];

    let results = generate_palettes(&requests, &SearchOptions::default());
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].as_ref().unwrap().lighter, "#f4eaf3");
    assert!(matches!(results[1], Err(Error::InvalidColorFormat(_))));
    let black = results[2].as_ref().unwrap();
    assert_eq!(black.lighter, "#808080");
    assert_eq!(black.darker, NO_DARKER_VARIANT);
}

#[test]
fn test_batch_matches_sequential() {
    let requirements = ContrastRequirements::new(Level::Aa, true);
    let requests: Vec<PaletteRequest> = ["#336699", "#BADA55", "#1a1a2e", "#eaeaea"]
        .into_iter()
        .map(|c| PaletteRequest::new(c, requirements))
        .collect();

    let parallel = generate_palettes(&requests, &SearchOptions::default());
    for (request, result) in requests.iter().zip(parallel) {
        assert_eq!(result, generate_palette(request));
    }
}

#[test]
fn test_palette_serializes_flat() {
    let palette =
        generate_palette(&PaletteRequest::new("#336699", ContrastRequirements::default())).unwrap();
    let json = serde_json::to_value(&palette).unwrap();
    assert_eq!(json["base"], "#336699");
    assert_eq!(json["lighter"], "#d9e6f2");
    assert_eq!(json["darker"], NO_DARKER_VARIANT);
}

#[test]
fn test_extended_second_search_finds_further_variant() {
    assert_eq!(
        extended("#BADA55", Level::Aaa, false),
        ExtendedPalette::Darker {
            base: "#BADA55".to_string(),
            darker1: "#313c0d".to_string(),
            darker2: "#202709".to_string(),
        }
    );
    assert_eq!(
        extended("#000000", Level::Aa, true),
        ExtendedPalette::Lighter {
            base: "#000000".to_string(),
            lighter1: "#666666".to_string(),
            lighter2: "#808080".to_string(),
        }
    );
}

#[test]
fn test_extended_shifts_when_second_search_repeats_first() {
    // Black first passes AA at factor 0.5, so the second search lands on it again
    assert_eq!(
        extended("#000000", Level::Aa, false),
        ExtendedPalette::Lighter {
            base: "#000000".to_string(),
            lighter1: "#808080".to_string(),
            lighter2: "#9a9a9a".to_string(),
        }
    );
    assert_eq!(
        extended("#eaeaea", Level::Aaa, false),
        ExtendedPalette::Darker {
            base: "#eaeaea".to_string(),
            darker1: "#444444".to_string(),
            darker2: "#2b2b2b".to_string(),
        }
    );
}

#[test]
fn test_extended_keeps_standard_shape_when_both_or_neither_found() {
    let both = extended("#944B89", Level::Aa, true);
    assert_eq!(
        both,
        ExtendedPalette::Standard(Palette {
            base: "#944B89".to_string(),
            lighter: "#dbb7d5".to_string(),
            darker: "#1e0f1b".to_string(),
        })
    );

    let neither = extended("#808080", Level::Aaa, false);
    let expected = generate_palette(&PaletteRequest::new(
        "#808080",
        ContrastRequirements::new(Level::Aaa, false),
    ))
    .unwrap();
    assert_eq!(neither, ExtendedPalette::Standard(expected));
}

#[test]
fn test_extended_variants_pass_against_base() {
    for r in (0..=255u16).step_by(51) {
        for g in (0..=255u16).step_by(51) {
            for b in (0..=255u16).step_by(51) {
                let base = format!("#{:02x}{:02x}{:02x}", r, g, b);
                for (level, large) in [(Level::Aa, false), (Level::Aaa, false), (Level::Aa, true)] {
                    let requirements = ContrastRequirements::new(level, large);
                    let (first, second) = match extended(&base, level, large) {
                        ExtendedPalette::Lighter {
                            lighter1, lighter2, ..
                        } => (lighter1, lighter2),
                        ExtendedPalette::Darker {
                            darker1, darker2, ..
                        } => (darker1, darker2),
                        ExtendedPalette::Standard(_) => continue,
                    };
                    for variant in [first, second] {
                        let check = ConformanceCheck::with_requirements(
                            variant.clone(),
                            &base,
                            requirements,
                        );
                        assert!(passes_wcag(&check).unwrap(), "{variant} for {base}");
                    }
                }
            }
        }
    }
}

#[test]
fn test_extended_serializes_flat() {
    let json = serde_json::to_value(extended("#BADA55", Level::Aa, false)).unwrap();
    assert_eq!(json["base"], "#BADA55");
    assert_eq!(json["darker1"], "#425112");
    assert_eq!(json["darker2"], "#202709");
    assert!(json.get("lighter").is_none());

    let json = serde_json::to_value(extended("#336699", Level::Aa, true)).unwrap();
    assert_eq!(json["lighter"], "#9fbfdf");
    assert_eq!(json["darker"], "#060d13");
}

#[test]
fn test_extended_rejects_malformed_base() {
    let request = PaletteRequest::new("#12", ContrastRequirements::default());
    assert_eq!(
        generate_extended_palette(&request, &SearchOptions::default()),
        Err(Error::InvalidColorFormat("#12".to_string()))
    );
}

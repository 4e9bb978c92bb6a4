use frontpanel_features::{decorative_fill, safe_interior, Feature, FillOptions};
use frontpanel_formats::{FormatKind, PanelFormat};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn any_kind() -> impl Strategy<Value = FormatKind> {
    prop::sample::select(FormatKind::ALL.to_vec())
}

fn fill(format: &PanelFormat, options: &FillOptions, seed: u64) -> Vec<Feature> {
    let mut rng = StdRng::seed_from_u64(seed);
    decorative_fill(format, options, &mut rng).unwrap()
}

proptest! {
    #[test]
    fn fill_stays_inside_safe_interior(kind in any_kind(), units in 1i64..=42, seed in any::<u64>()) {
        let format = PanelFormat::new(kind, units).unwrap();
        let area = safe_interior(&format);
        let options = FillOptions { count: 25, ..FillOptions::default() };
        for feature in fill(&format, &options, seed) {
            match feature {
                Feature::Line(line) => {
                    prop_assert!(area.contains(line.start()), "{} outside {:?}", line, area);
                    prop_assert!(area.contains(line.end()), "{} outside {:?}", line, area);
                    prop_assert!(options.thicknesses.contains(&line.thickness()));
                }
                other => prop_assert!(false, "unexpected feature {}", other),
            }
        }
    }

    #[test]
    fn fill_is_reproducible_for_a_seed(kind in any_kind(), units in 1i64..=42, seed in any::<u64>()) {
        let format = PanelFormat::new(kind, units).unwrap();
        let options = FillOptions { count: 10, ..FillOptions::default() };
        prop_assert_eq!(fill(&format, &options, seed), fill(&format, &options, seed));
    }
}

#[test]
fn test_custom_thickness_set() {
    let format = PanelFormat::new(FormatKind::Intellijel, 12).unwrap();
    let options = FillOptions {
        count: 50,
        thicknesses: vec![0.3],
    };
    for feature in fill(&format, &options, 99) {
        let Feature::Line(line) = feature else {
            panic!("fill produced a non-line feature");
        };
        assert_eq!(line.thickness(), 0.3);
    }
}

#[test]
fn test_zero_count_is_empty() {
    let format = PanelFormat::new(FormatKind::Pulplogic, 8).unwrap();
    let options = FillOptions {
        count: 0,
        ..FillOptions::default()
    };
    assert!(fill(&format, &options, 1).is_empty());
}

#[test]
fn test_different_seeds_differ() {
    let format = PanelFormat::new(FormatKind::Eurorack, 16).unwrap();
    let options = FillOptions::default();
    assert_ne!(fill(&format, &options, 1), fill(&format, &options, 2));
}

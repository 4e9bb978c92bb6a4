use frontpanel_core::Point;
use frontpanel_features::{
    classify, header_footer, outline, Circle, Diagnostic, Feature, FillOptions, LayoutRequest,
    PanelLayout, Purpose, Text, TextOptions,
};
use frontpanel_formats::{FormatKind, PanelFormat};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_blank_panel_buckets() {
    let format = PanelFormat::new(FormatKind::Eurorack, 10).unwrap();
    let request = LayoutRequest {
        header: "VCF".into(),
        footer: "jsleeio".into(),
        fill: Some(FillOptions {
            count: 12,
            ..FillOptions::default()
        }),
    };
    let mut rng = StdRng::seed_from_u64(42);
    let layout = PanelLayout::generate(format, &request, &mut rng).unwrap();
    let classified = classify(layout.features.clone());

    assert_eq!(classified.outline.len(), 4);
    assert_eq!(classified.drill.len(), 4);
    assert_eq!(classified.decoration.len(), 2 + 12);
    assert!(classified.diagnostics.is_empty());
    assert_eq!(classified.total(), layout.len());
}

#[test]
fn test_classification_keeps_input_order() {
    let format = PanelFormat::new(FormatKind::Intellijel, 4).unwrap();
    let features = outline(&format);
    let classified = classify(features.clone());
    assert_eq!(classified.outline[..], features[..4]);
    assert_eq!(classified.drill[..], features[4..]);
}

#[test]
fn test_mixed_purposes() {
    let marking_circle: Feature = Circle::new(Point::new(10.0, 60.0), 4.0).unwrap().into();
    let cutout_text: Feature = Text::new(Point::new(10.0, 40.0), "OOPS", TextOptions::default())
        .unwrap()
        .with_purpose(Purpose::Cutout)
        .into();

    let classified = classify(vec![marking_circle.clone(), cutout_text.clone()]);
    assert_eq!(classified.decoration, vec![marking_circle]);
    assert_eq!(classified.outline, vec![cutout_text]);
    assert_eq!(classified.diagnostics.len(), 1);
    assert!(matches!(
        &classified.diagnostics[0],
        Diagnostic::CutoutText { text, .. } if text == "OOPS"
    ));
}

#[test]
fn test_header_footer_one_unit_panel() {
    let format = PanelFormat::new(FormatKind::Pulplogic, 1).unwrap();
    let features = header_footer(&format, "", "X");
    assert_eq!(features.len(), 1);
    let Feature::Text(text) = &features[0] else {
        panic!("expected text");
    };
    assert_eq!(text.origin().x, 2.5);
    assert_eq!(text.origin().y, format.mounting_hole_bottom_y());
}

#[test]
fn test_feature_json_shape() {
    let feature: Feature = Circle::new(Point::new(7.5, 3.0), 1.6)
        .unwrap()
        .with_purpose(Purpose::Cutout)
        .into();
    let value = serde_json::to_value(&feature).unwrap();
    assert_eq!(value["kind"], "circle");
    assert_eq!(value["purpose"], "cutout");
    assert_eq!(value["origin"]["x"], 7.5);

    let back: Feature = serde_json::from_value(value).unwrap();
    assert_eq!(back, feature);
}

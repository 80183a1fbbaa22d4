// File: crates/xyplot-core/tests/options.rs
// Purpose: Option defaults and TOML deserialization, including rejection of unknown keys.

use xyplot_core::{LengthUnit, PlotOptions};

#[test]
fn defaults_match_documented_values() {
    let o = PlotOptions::default();
    assert_eq!(o.x.ticks, 10);
    assert_eq!(o.y.subticks, 0);
    assert!(o.x.ticks_in && !o.x.ticks_out);
    assert!(!o.y.grid);
    assert!(o.border.left && o.border.bottom && o.border.right && o.border.top);
    assert_eq!(o.stroke.width_px(), 1.0);
    assert_eq!(o.theme, "light");
    assert!(!o.store_data);
}

#[test]
fn partial_toml_fills_defaults() {
    let o: PlotOptions = toml::from_str(
        r#"
        theme = "dark"
        background = true

        [x]
        format = ".1f"
        min = -2.5
        subticks = 4

        [labels]
        title = "Response"

        [stroke]
        width = 1.5
        unit = "pt"
        "#,
    )
    .unwrap();
    assert_eq!(o.theme, "dark");
    assert!(o.background);
    assert_eq!(o.x.format, ".1f");
    assert_eq!(o.x.min, Some(-2.5));
    assert_eq!(o.x.max, None);
    assert_eq!(o.x.subticks, 4);
    assert_eq!(o.x.ticks, 10);
    assert_eq!(o.labels.title, "Response");
    assert_eq!(o.stroke.unit, LengthUnit::Pt);
    assert!((o.stroke.width_px() - 2.0).abs() < 1e-12);
    assert!(o.theme().is_ok());
}

#[test]
fn unknown_keys_are_rejected() {
    let err = toml::from_str::<PlotOptions>("[x]\ntick = 5\n").unwrap_err();
    assert!(err.to_string().contains("tick"), "{err}");
    assert!(toml::from_str::<PlotOptions>("colour = \"red\"\n").is_err());
}

#[test]
fn length_units_convert_to_px() {
    assert_eq!("in".parse::<LengthUnit>().unwrap().to_px(1.0), 96.0);
    assert!((LengthUnit::Mm.to_px(25.4) - 96.0).abs() < 1e-9);
    assert!((LengthUnit::Pc.to_px(1.0) - 16.0).abs() < 1e-9);
    assert!("furlong".parse::<LengthUnit>().is_err());
}

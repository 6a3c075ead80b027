use approx::assert_abs_diff_eq;
use serde_json::json;
use spectra::{normalize, spectra, Error, Hsv, PartialColor, Rgb, Spectra};

#[test]
fn primaries_have_the_expected_hsv() {
    let cases = [
        (json!({ "r": 255, "g": 0, "b": 0 }), Hsv::new(0.0, 1.0, 1.0)),
        (json!({ "r": 0, "g": 255, "b": 0 }), Hsv::new(120.0, 1.0, 1.0)),
        (json!({ "r": 0, "g": 0, "b": 255 }), Hsv::new(240.0, 1.0, 1.0)),
        (json!({ "r": 255, "g": 255, "b": 255 }), Hsv::new(0.0, 0.0, 1.0)),
        (json!({ "r": 0, "g": 0, "b": 0 }), Hsv::new(0.0, 0.0, 0.0)),
    ];

    for (input, expected) in cases {
        assert_eq!(spectra(&input).hsv(), Ok(expected), "{input}");
    }
}

#[test]
fn alias_keys_become_channels() {
    let color = spectra(&json!({ "red": 10, "green": 20, "blue": 30 }));
    let value = serde_json::to_value(color.color().unwrap()).unwrap();
    assert_eq!(value["rgb"], json!({ "r": 10.0, "g": 20.0, "b": 30.0 }));
}

#[test]
fn mutating_a_channel_keeps_both_notations_in_sync() {
    let mut color = spectra(&json!({ "r": 210, "g": 105, "b": 30 }));
    color.set_red(128.0).unwrap().set_blue(0.0).unwrap();

    let rgb = color.rgb().unwrap();
    let back = color.hsv().unwrap().to_rgb();
    assert_abs_diff_eq!(back.red, rgb.red, epsilon = 1.0e-3);
    assert_abs_diff_eq!(back.green, rgb.green, epsilon = 1.0e-3);
    assert_abs_diff_eq!(back.blue, rgb.blue, epsilon = 1.0e-3);
    assert_eq!(color.hsv(), Ok(Rgb::new(128.0, 105.0, 0.0).to_hsv()));
}

#[test]
fn invalid_input_fails_on_access() {
    let color = spectra(&json!({ "hsv": { "h": 0, "s": 1, "v": 1 } }));
    assert_eq!(color.red(), Err(Error::MissingColorValue));
    assert!(Spectra::try_from_value(&json!(true)).is_err());
}

#[test]
fn normalizing_a_serialized_value_is_stable() {
    let color = spectra(&json!({ "r": 12, "g": 200, "b": 99 }))
        .into_color()
        .unwrap();
    let json = serde_json::to_value(&color).unwrap();
    let again = normalize(&PartialColor::from_value(&json)).unwrap();
    assert_eq!(again.rgb, color.rgb);
    assert_eq!(again.hsv, color.hsv);
    assert_eq!(again.alpha, 1.0);
}

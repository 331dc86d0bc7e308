use numeral::Engine;

fn convert(phrase: &str) -> numeral::ParsedResult {
    Engine::new().convert(phrase)
}

#[test]
fn test_hundred() {
    let result = convert("сто");
    assert!(!result.has_errors);
    assert_eq!(result.numeric_value, 100.0);
}

#[test]
fn test_tens_and_units() {
    assert_eq!(convert("двадцать три").numeric_value, 23.0);
    assert_eq!(convert("сто пять").numeric_value, 105.0);
}

#[test]
fn test_negative_number() {
    let result = convert("минус пять");
    assert!(!result.has_errors);
    assert_eq!(result.numeric_value, -5.0);
    assert!(result.is_negative);
}

#[test]
fn test_fraction_with_whole_part() {
    let result = convert("две целых пять десятых");
    assert!(!result.has_errors);
    assert!((result.numeric_value - 2.5).abs() < 1e-9);
    assert!(result.has_fractional_part);
}

#[test]
fn test_bare_thousand() {
    let result = convert("тысяча");
    assert!(!result.has_errors);
    assert_eq!(result.numeric_value, 1_000.0);
}

#[test]
fn test_number_disagreement_fails() {
    let result = convert("пять тысяча");
    assert!(result.has_errors);
    assert_eq!(result.numeric_value, 0.0);
    assert!(!result.error_messages.is_empty());
}

#[test]
fn test_multiplier_order_fails() {
    let result = convert("миллион тысяча");
    assert!(result.has_errors);
    assert!(result.error_messages[0].starts_with("Неправильный порядок"));

    assert!(convert("тысяча миллион").has_errors);
}

#[test]
fn test_large_numbers() {
    let cases = [
        ("девятьсот девяносто девять тысяч девятьсот девяносто девять", 999_999.0),
        ("один миллион", 1_000_000.0),
        ("двенадцать миллионов триста сорок пять тысяч шестьсот семьдесят восемь", 12_345_678.0),
        ("девятьсот девяносто девять миллиардов", 999_000_000_000.0),
    ];
    for (phrase, expected) in cases {
        let result = convert(phrase);
        assert!(!result.has_errors, "{phrase}: {:?}", result.error_messages);
        assert_eq!(result.numeric_value, expected, "{phrase}");
    }
}

#[test]
fn test_mixed_case_and_spacing() {
    let result = convert("  Минус   ДВЕСТИ  ");
    assert_eq!(result.numeric_value, -200.0);
    assert_eq!(result.original_text, "  Минус   ДВЕСТИ  ");
    assert_eq!(result.normalized_text.as_deref(), Some("минус двести"));
}

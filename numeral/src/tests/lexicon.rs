use crate::grammar::{Gender, GrammaticalCase, GrammaticalNumber, NumeralClass};
use crate::lexicon::Lexicon;

#[test]
fn test_lookup_is_case_insensitive() {
    let lexicon = Lexicon::new();
    assert_eq!(lexicon.value_of("ДВАДЦАТЬ"), Some(20));
    assert_eq!(lexicon.value_of("Тысяч"), Some(1_000));
    assert_eq!(lexicon.value_of("  пять "), Some(5));
    assert_eq!(lexicon.value_of("абв"), None);
    assert_eq!(lexicon.value_of(""), None);
}

#[test]
fn test_yo_and_ye_spellings() {
    let lexicon = Lexicon::new();
    for (yo, ye) in [
        ("трёх", "трех"),
        ("трём", "трем"),
        ("четырёх", "четырех"),
        ("трёхсот", "трехсот"),
        ("четырёмстам", "четыремстам"),
    ] {
        assert_eq!(lexicon.value_of(yo), lexicon.value_of(ye), "{yo}/{ye}");
        assert!(lexicon.value_of(yo).is_some());
    }
}

#[test]
fn test_instrumental_variants() {
    let lexicon = Lexicon::new();
    assert_eq!(lexicon.value_of("восемью"), Some(8));
    assert_eq!(lexicon.value_of("восьмью"), Some(8));
    assert_eq!(lexicon.value_of("восьмьюдесятью"), Some(80));
    assert_eq!(lexicon.value_of("восьмьюстами"), Some(800));
}

#[test]
fn test_prepositional_of_ten() {
    let lexicon = Lexicon::new();
    let entry = lexicon.entry("десять").unwrap();
    assert_eq!(entry.forms_in(GrammaticalCase::Prepositional), &["десяти"]);
}

#[test]
fn test_classes_and_genders() {
    let lexicon = Lexicon::new();
    assert_eq!(lexicon.class_of("семь"), Some(NumeralClass::Unit));
    assert_eq!(lexicon.class_of("семнадцать"), Some(NumeralClass::Unit));
    assert_eq!(lexicon.class_of("сорока"), Some(NumeralClass::Ten));
    assert_eq!(lexicon.class_of("двухсот"), Some(NumeralClass::Hundred));
    assert_eq!(lexicon.class_of("миллиардов"), Some(NumeralClass::Multiplier));

    assert_eq!(lexicon.gender_of("одна"), Some(Gender::Feminine));
    assert_eq!(lexicon.gender_of("одно"), Some(Gender::Neuter));
    assert_eq!(lexicon.gender_of("два"), Some(Gender::Masculine));
    assert_eq!(lexicon.gender_of("тысяча"), Some(Gender::Feminine));
    assert_eq!(lexicon.gender_of("миллион"), Some(Gender::Masculine));
    assert_eq!(lexicon.gender_of("пять"), None);
}

#[test]
fn test_shared_forms_resolve_to_first_entry() {
    let lexicon = Lexicon::new();
    assert_eq!(lexicon.lookup("одного").unwrap().canonical_form, "один");
    assert_eq!(lexicon.lookup("двух").unwrap().canonical_form, "два");

    let owners: Vec<_> = lexicon
        .readings("двух")
        .iter()
        .map(|reading| reading.entry.canonical_form)
        .collect();
    assert!(owners.contains(&"два"));
    assert!(owners.contains(&"две"));
}

#[test]
fn test_multiplier_readings_carry_number() {
    let lexicon = Lexicon::new();
    let readings = lexicon.readings("тысячи");
    assert!(readings.iter().any(|r| r.case == GrammaticalCase::Genitive
        && r.number == Some(GrammaticalNumber::Singular)));
    assert!(readings.iter().any(|r| r.case == GrammaticalCase::Nominative
        && r.number == Some(GrammaticalNumber::Few)));
    assert!(!readings
        .iter()
        .any(|r| r.number == Some(GrammaticalNumber::Many)));

    assert!(lexicon
        .readings("миллионы")
        .iter()
        .all(|r| r.number == Some(GrammaticalNumber::Many)));
}

#[test]
fn test_forms_for() {
    let lexicon = Lexicon::new();
    assert_eq!(
        lexicon.forms_for("три", GrammaticalCase::Genitive),
        &["трёх", "трех"]
    );
    assert_eq!(
        lexicon.forms_for("миллион", GrammaticalCase::Nominative),
        &["миллион", "миллиона", "миллионов", "миллионы"]
    );
    assert!(lexicon.forms_for("абв", GrammaticalCase::Genitive).is_empty());
}

#[test]
fn test_forms_by_case_are_deduplicated() {
    let lexicon = Lexicon::new();
    for entry in lexicon.entries() {
        for (case, forms) in &entry.forms_by_case {
            let mut seen = forms.clone();
            seen.sort_unstable();
            seen.dedup();
            assert_eq!(seen.len(), forms.len(), "{} {}", entry.canonical_form, case);
        }
    }
}

#[test]
fn test_entry_set() {
    let lexicon = Lexicon::new();
    let mut values: Vec<i64> = lexicon.entries().iter().map(|e| e.value).collect();
    values.dedup();
    assert_eq!(values.len(), 20 + 8 + 9 + 3);
    assert_eq!(lexicon.entries().len(), 43);
    assert!(lexicon.entry("Тысяча").is_some());
    assert!(lexicon.entry("тысячи").is_none());
}

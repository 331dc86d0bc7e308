use numeral::{Engine, IssueKind};

fn errors(phrase: &str) -> Vec<String> {
    Engine::new().validate(phrase).errors()
}

#[test]
fn test_messages_name_the_expected_form() {
    assert_eq!(
        errors("пять миллион"),
        vec!["С числом 5 должно быть 'миллионов', а не 'миллион'"]
    );
    assert_eq!(
        errors("четыре миллиард"),
        vec!["С числом 4 должно быть 'миллиарда', а не 'миллиард'"]
    );
}

#[test]
fn test_gender_message_names_the_quantifier() {
    assert_eq!(
        errors("одно тысяча"),
        vec!["Род не согласован: 'одно' не сочетается с 'тысяча' (женский род), нужно 'одна'"]
    );
    assert_eq!(
        errors("две миллиона"),
        vec!["Род не согласован: 'две' не сочетается с 'миллиона' (мужской род), нужно 'два'"]
    );
}

#[test]
fn test_all_problems_are_listed_in_order() {
    let outcome = Engine::new().validate("сто x тысяча миллион");
    let kinds: Vec<IssueKind> = outcome.issues.iter().map(|issue| issue.kind).collect();
    assert_eq!(
        kinds,
        vec![
            IssueKind::InvalidCharacters,
            IssueKind::UnknownWord,
            IssueKind::MultiplierOrder,
        ]
    );
}

#[test]
fn test_issue_spans_point_into_normalized_text() {
    let outcome = Engine::new().validate("Пять  Тысяча");
    assert_eq!(outcome.normalized, "пять тысяча");
    let span = outcome.issues[0].span.expect("agreement issues carry a span");
    assert_eq!(&outcome.normalized[span.range()], "тысяча");
}

#[test]
fn test_issue_kinds_are_grouped() {
    assert!(IssueKind::EmptyInput.is_input_error());
    assert!(IssueKind::UnknownWordPart.is_lexical());
    assert!(IssueKind::GenderAgreement.is_grammatical());
    assert!(!IssueKind::LimitExceeded.is_grammatical());
}

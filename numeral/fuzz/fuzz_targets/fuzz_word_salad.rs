#![no_main]

use libfuzzer_sys::fuzz_target;
use numeral::Engine;

const WORDS: &[&str] = &[
    "ноль", "один", "одна", "одно", "два", "две", "три", "четыре", "пять", "девять",
    "десять", "двадцать", "сорок", "девяносто", "сто", "двести", "девятьсот", "тысяча",
    "тысячи", "тысяч", "миллион", "миллиона", "миллионов", "миллиард", "миллиардов",
    "двух", "пяти", "тысячах", "и", "минус", "целых", "целая", "десятых", "сотых",
    "тысячных", "о", "об", "во", ",", ".",
];

// Phrases built from lexicon words reach the converter far more often than
// raw bytes do.
fuzz_target!(|data: &[u8]| {
    let phrase = data
        .iter()
        .map(|byte| WORDS[*byte as usize % WORDS.len()])
        .collect::<Vec<_>>()
        .join(" ");

    let engine = Engine::new();
    let outcome = engine.validate(&phrase);
    let result = engine.convert(&phrase);
    if outcome.is_valid() && !result.has_errors {
        assert!(result.numeric_value.is_finite());
    }
});

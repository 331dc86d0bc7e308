//! Population data for the lexicon.
//!
//! Every paradigm lists the surface forms in case order: nominative,
//! genitive, dative, accusative, instrumental, prepositional. A slot may hold
//! several spellings ("трёх" and "трех").

use crate::grammar::{Gender, GrammaticalNumber, NumeralClass};

pub(super) type Paradigm = [&'static [&'static str]; 6];

pub(super) struct EntryRow {
    pub canonical: &'static str,
    pub value: i64,
    pub class: NumeralClass,
    pub gender: Option<Gender>,
    pub paradigms: &'static [(Option<GrammaticalNumber>, Paradigm)],
}

macro_rules! numeral {
    ($canonical:literal, $value:expr, $class:ident, $gender:expr, $paradigm:expr) => {
        EntryRow {
            canonical: $canonical,
            value: $value,
            class: NumeralClass::$class,
            gender: $gender,
            paradigms: &[(None, $paradigm)],
        }
    };
}

macro_rules! multiplier {
    ($canonical:literal, $value:expr, $gender:expr, singular: $singular:expr, few: $few:expr, many: $many:expr) => {
        EntryRow {
            canonical: $canonical,
            value: $value,
            class: NumeralClass::Multiplier,
            gender: Some($gender),
            paradigms: &[
                (Some(GrammaticalNumber::Singular), $singular),
                (Some(GrammaticalNumber::Few), $few),
                (Some(GrammaticalNumber::Many), $many),
            ],
        }
    };
}

const M: Option<Gender> = Some(Gender::Masculine);
const F: Option<Gender> = Some(Gender::Feminine);
const N: Option<Gender> = Some(Gender::Neuter);

/// Entries in lookup priority order: a form shared by several entries
/// resolves to the first one listed here.
pub(super) const ENTRIES: &[EntryRow] = &[
    // units
    numeral!("ноль", 0, Unit, None, [&["ноль"], &["ноля"], &["нолю"], &["ноль"], &["нолём"], &["ноле"]]),
    numeral!("один", 1, Unit, M, [&["один"], &["одного"], &["одному"], &["один"], &["одним"], &["одном"]]),
    numeral!("одна", 1, Unit, F, [&["одна"], &["одной"], &["одной"], &["одну"], &["одной"], &["одной"]]),
    numeral!("одно", 1, Unit, N, [&["одно"], &["одного"], &["одному"], &["одно"], &["одним"], &["одном"]]),
    numeral!("два", 2, Unit, M, [&["два"], &["двух"], &["двум"], &["два"], &["двумя"], &["двух"]]),
    numeral!("две", 2, Unit, F, [&["две"], &["двух"], &["двум"], &["две"], &["двумя"], &["двух"]]),
    numeral!("три", 3, Unit, None, [&["три"], &["трёх", "трех"], &["трём", "трем"], &["три"], &["тремя"], &["трёх", "трех"]]),
    numeral!("четыре", 4, Unit, None, [&["четыре"], &["четырёх", "четырех"], &["четырём", "четырем"], &["четыре"], &["четырьмя"], &["четырёх", "четырех"]]),
    numeral!("пять", 5, Unit, None, [&["пять"], &["пяти"], &["пяти"], &["пять"], &["пятью"], &["пяти"]]),
    numeral!("шесть", 6, Unit, None, [&["шесть"], &["шести"], &["шести"], &["шесть"], &["шестью"], &["шести"]]),
    numeral!("семь", 7, Unit, None, [&["семь"], &["семи"], &["семи"], &["семь"], &["семью"], &["семи"]]),
    numeral!("восемь", 8, Unit, None, [&["восемь"], &["восьми"], &["восьми"], &["восемь"], &["восемью", "восьмью"], &["восьми"]]),
    numeral!("девять", 9, Unit, None, [&["девять"], &["девяти"], &["девяти"], &["девять"], &["девятью"], &["девяти"]]),
    numeral!("десять", 10, Unit, None, [&["десять"], &["десяти"], &["десяти"], &["десять"], &["десятью"], &["десяти"]]),
    numeral!("одиннадцать", 11, Unit, None, [&["одиннадцать"], &["одиннадцати"], &["одиннадцати"], &["одиннадцать"], &["одиннадцатью"], &["одиннадцати"]]),
    numeral!("двенадцать", 12, Unit, None, [&["двенадцать"], &["двенадцати"], &["двенадцати"], &["двенадцать"], &["двенадцатью"], &["двенадцати"]]),
    numeral!("тринадцать", 13, Unit, None, [&["тринадцать"], &["тринадцати"], &["тринадцати"], &["тринадцать"], &["тринадцатью"], &["тринадцати"]]),
    numeral!("четырнадцать", 14, Unit, None, [&["четырнадцать"], &["четырнадцати"], &["четырнадцати"], &["четырнадцать"], &["четырнадцатью"], &["четырнадцати"]]),
    numeral!("пятнадцать", 15, Unit, None, [&["пятнадцать"], &["пятнадцати"], &["пятнадцати"], &["пятнадцать"], &["пятнадцатью"], &["пятнадцати"]]),
    numeral!("шестнадцать", 16, Unit, None, [&["шестнадцать"], &["шестнадцати"], &["шестнадцати"], &["шестнадцать"], &["шестнадцатью"], &["шестнадцати"]]),
    numeral!("семнадцать", 17, Unit, None, [&["семнадцать"], &["семнадцати"], &["семнадцати"], &["семнадцать"], &["семнадцатью"], &["семнадцати"]]),
    numeral!("восемнадцать", 18, Unit, None, [&["восемнадцать"], &["восемнадцати"], &["восемнадцати"], &["восемнадцать"], &["восемнадцатью"], &["восемнадцати"]]),
    numeral!("девятнадцать", 19, Unit, None, [&["девятнадцать"], &["девятнадцати"], &["девятнадцати"], &["девятнадцать"], &["девятнадцатью"], &["девятнадцати"]]),
    // tens
    numeral!("двадцать", 20, Ten, None, [&["двадцать"], &["двадцати"], &["двадцати"], &["двадцать"], &["двадцатью"], &["двадцати"]]),
    numeral!("тридцать", 30, Ten, None, [&["тридцать"], &["тридцати"], &["тридцати"], &["тридцать"], &["тридцатью"], &["тридцати"]]),
    numeral!("сорок", 40, Ten, None, [&["сорок"], &["сорока"], &["сорока"], &["сорок"], &["сорока"], &["сорока"]]),
    numeral!("пятьдесят", 50, Ten, None, [&["пятьдесят"], &["пятидесяти"], &["пятидесяти"], &["пятьдесят"], &["пятьюдесятью"], &["пятидесяти"]]),
    numeral!("шестьдесят", 60, Ten, None, [&["шестьдесят"], &["шестидесяти"], &["шестидесяти"], &["шестьдесят"], &["шестьюдесятью"], &["шестидесяти"]]),
    numeral!("семьдесят", 70, Ten, None, [&["семьдесят"], &["семидесяти"], &["семидесяти"], &["семьдесят"], &["семьюдесятью"], &["семидесяти"]]),
    numeral!("восемьдесят", 80, Ten, None, [&["восемьдесят"], &["восьмидесяти"], &["восьмидесяти"], &["восемьдесят"], &["восемьюдесятью", "восьмьюдесятью"], &["восьмидесяти"]]),
    numeral!("девяносто", 90, Ten, None, [&["девяносто"], &["девяноста"], &["девяноста"], &["девяносто"], &["девяноста"], &["девяноста"]]),
    // hundreds
    numeral!("сто", 100, Hundred, None, [&["сто"], &["ста"], &["ста"], &["сто"], &["ста"], &["ста"]]),
    numeral!("двести", 200, Hundred, None, [&["двести"], &["двухсот"], &["двумстам"], &["двести"], &["двумястами"], &["двухстах"]]),
    numeral!("триста", 300, Hundred, None, [&["триста"], &["трёхсот", "трехсот"], &["трёмстам", "тремстам"], &["триста"], &["тремястами"], &["трёхстах", "трехстах"]]),
    numeral!("четыреста", 400, Hundred, None, [&["четыреста"], &["четырёхсот", "четырехсот"], &["четырёмстам", "четыремстам"], &["четыреста"], &["четырьмястами"], &["четырёхстах", "четырехстах"]]),
    numeral!("пятьсот", 500, Hundred, None, [&["пятьсот"], &["пятисот"], &["пятистам"], &["пятьсот"], &["пятьюстами"], &["пятистах"]]),
    numeral!("шестьсот", 600, Hundred, None, [&["шестьсот"], &["шестисот"], &["шестистам"], &["шестьсот"], &["шестьюстами"], &["шестистах"]]),
    numeral!("семьсот", 700, Hundred, None, [&["семьсот"], &["семисот"], &["семистам"], &["семьсот"], &["семьюстами"], &["семистах"]]),
    numeral!("восемьсот", 800, Hundred, None, [&["восемьсот"], &["восьмисот"], &["восьмистам"], &["восемьсот"], &["восемьюстами", "восьмьюстами"], &["восьмистах"]]),
    numeral!("девятьсот", 900, Hundred, None, [&["девятьсот"], &["девятисот"], &["девятистам"], &["девятьсот"], &["девятьюстами"], &["девятистах"]]),
    // multipliers
    multiplier!("тысяча", 1_000, Gender::Feminine,
        singular: [&["тысяча"], &["тысячи"], &["тысяче"], &["тысячу"], &["тысячей"], &["тысяче"]],
        few: [&["тысячи"], &["тысяч"], &["тысячам"], &["тысячи"], &["тысячами"], &["тысячах"]],
        many: [&["тысяч"], &["тысяч"], &["тысячам"], &["тысяч"], &["тысячами"], &["тысячах"]]),
    multiplier!("миллион", 1_000_000, Gender::Masculine,
        singular: [&["миллион"], &["миллиона"], &["миллиону"], &["миллион"], &["миллионом"], &["миллионе"]],
        few: [&["миллиона"], &["миллионов"], &["миллионам"], &["миллиона"], &["миллионами"], &["миллионах"]],
        many: [&["миллионов", "миллионы"], &["миллионов"], &["миллионам"], &["миллионов", "миллионы"], &["миллионами"], &["миллионах"]]),
    multiplier!("миллиард", 1_000_000_000, Gender::Masculine,
        singular: [&["миллиард"], &["миллиарда"], &["миллиарду"], &["миллиард"], &["миллиардом"], &["миллиарде"]],
        few: [&["миллиарда"], &["миллиардов"], &["миллиардам"], &["миллиарда"], &["миллиардами"], &["миллиардах"]],
        many: [&["миллиардов", "миллиарды"], &["миллиардов"], &["миллиардам"], &["миллиардов", "миллиарды"], &["миллиардами"], &["миллиардах"]]),
];

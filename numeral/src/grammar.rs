use serde::Serialize;
use std::fmt;

/// One of the six Russian grammatical cases.
///
/// The order of the variants is the conventional school order and is the
/// order in which the lexicon stores a paradigm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GrammaticalCase {
    /// именительный: один, два
    Nominative,
    /// родительный: одного, двух
    Genitive,
    /// дательный: одному, двум
    Dative,
    /// винительный: один, два
    Accusative,
    /// творительный: одним, двумя
    Instrumental,
    /// предложный: об одном, о двух
    Prepositional,
}

impl GrammaticalCase {
    pub const ALL: [GrammaticalCase; 6] = [
        GrammaticalCase::Nominative,
        GrammaticalCase::Genitive,
        GrammaticalCase::Dative,
        GrammaticalCase::Accusative,
        GrammaticalCase::Instrumental,
        GrammaticalCase::Prepositional,
    ];

    /// Nominative and accusative: the cases in which a quantifier governs the
    /// number of the following noun instead of agreeing with it.
    pub fn is_direct(&self) -> bool {
        matches!(
            self,
            GrammaticalCase::Nominative | GrammaticalCase::Accusative
        )
    }

    /// Russian name of the case, used in diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            GrammaticalCase::Nominative => "именительный",
            GrammaticalCase::Genitive => "родительный",
            GrammaticalCase::Dative => "дательный",
            GrammaticalCase::Accusative => "винительный",
            GrammaticalCase::Instrumental => "творительный",
            GrammaticalCase::Prepositional => "предложный",
        }
    }

    /// Parse an English or Russian case name, ignoring letter case.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_lowercase();
        GrammaticalCase::ALL.into_iter().find(|case| {
            case.name() == name || format!("{:?}", case).to_lowercase() == name
        })
    }
}

impl fmt::Display for GrammaticalCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Masculine,
    Feminine,
    Neuter,
}

impl Gender {
    pub fn name(&self) -> &'static str {
        match self {
            Gender::Masculine => "мужской",
            Gender::Feminine => "женский",
            Gender::Neuter => "средний",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How a numeral takes part in place-value accumulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NumeralClass {
    /// 0 to 19
    Unit,
    /// 20 to 90
    Ten,
    /// 100 to 900
    Hundred,
    /// тысяча, миллион, миллиард
    Multiplier,
}

impl NumeralClass {
    pub fn name(&self) -> &'static str {
        match self {
            NumeralClass::Unit => "единица",
            NumeralClass::Ten => "десяток",
            NumeralClass::Hundred => "сотня",
            NumeralClass::Multiplier => "множитель",
        }
    }
}

impl fmt::Display for NumeralClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Grammatical number of a multiplier form, selected by the quantifier in
/// front of it: одна тысяча, две тысячи, пять тысяч.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GrammaticalNumber {
    Singular,
    /// after 2, 3, 4
    Few,
    /// after 0 and 5 and above
    Many,
}

impl GrammaticalNumber {
    /// The number a quantifier of the given value requires on the following
    /// multiplier when the quantifier stands in a direct case.
    ///
    /// Quantifiers are single lexicon words, so 11 to 14 never reach the
    /// 1 and 2..=4 arms.
    pub fn governed_by(value: i64) -> Self {
        match value {
            1 => GrammaticalNumber::Singular,
            2..=4 => GrammaticalNumber::Few,
            _ => GrammaticalNumber::Many,
        }
    }

    pub fn is_plural(&self) -> bool {
        !matches!(self, GrammaticalNumber::Singular)
    }
}

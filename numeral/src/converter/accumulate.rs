use crate::error::NumeralError;
use crate::grammar::NumeralClass;
use crate::lexicon::Lexicon;
use crate::NumeralResult;

/// Place-value accumulation over numeral words.
///
/// Units, tens and hundreds add up in a running block; a multiplier folds the
/// block into the total (a bare multiplier counts as one of it). Words the
/// lexicon does not know are skipped, and hyphenated compounds are read part
/// by part.
pub fn accumulate<'w>(
    lexicon: &Lexicon,
    words: impl IntoIterator<Item = &'w str>,
) -> NumeralResult<i64> {
    let mut total: i64 = 0;
    let mut block: i64 = 0;
    let mut quantified = false;
    let mut last_word = "";

    for word in words.into_iter().flat_map(|word| word.split('-')) {
        let Some(entry) = lexicon.lookup(word) else {
            continue;
        };
        last_word = word;
        let overflow = || NumeralError::Overflow {
            word: word.to_string(),
        };

        match entry.class {
            NumeralClass::Multiplier => {
                let quantity = if quantified { block } else { 1 };
                total = quantity
                    .checked_mul(entry.value)
                    .and_then(|scaled| total.checked_add(scaled))
                    .ok_or_else(overflow)?;
                block = 0;
                quantified = false;
            }
            NumeralClass::Hundred => {
                block = if block == 0 {
                    entry.value
                } else {
                    block.checked_add(entry.value).ok_or_else(overflow)?
                };
                quantified = true;
            }
            NumeralClass::Ten | NumeralClass::Unit => {
                block = block.checked_add(entry.value).ok_or_else(overflow)?;
                quantified = true;
            }
        }
    }

    total.checked_add(block).ok_or_else(|| NumeralError::Overflow {
        word: last_word.to_string(),
    })
}

//! The numeral lexicon: every numeral the converter knows, with all of its
//! surface forms.

use crate::grammar::{Gender, GrammaticalCase, GrammaticalNumber, NumeralClass};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

mod table;

/// One concrete spelling of a numeral, tagged with the grammatical context
/// it is valid in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SurfaceForm {
    pub text: &'static str,
    pub case: GrammaticalCase,
    /// Only multipliers distinguish number.
    pub number: Option<GrammaticalNumber>,
}

/// One semantic numeral ("два", "двести", "тысяча").
#[derive(Debug, Clone, Serialize)]
pub struct NumeralEntry {
    pub canonical_form: &'static str,
    pub value: i64,
    pub class: NumeralClass,
    pub gender: Option<Gender>,
    pub forms_by_case: BTreeMap<GrammaticalCase, Vec<&'static str>>,
    #[serde(skip)]
    forms: Vec<SurfaceForm>,
}

impl NumeralEntry {
    pub fn is_multiplier(&self) -> bool {
        self.class == NumeralClass::Multiplier
    }

    /// All tagged forms in population order
    pub fn forms(&self) -> &[SurfaceForm] {
        &self.forms
    }

    /// Forms valid in `case`, empty when the case has none.
    pub fn forms_in(&self, case: GrammaticalCase) -> &[&'static str] {
        self.forms_by_case
            .get(&case)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// First form for a case and number, used to name the expected spelling
    /// in agreement diagnostics.
    pub fn form_for(
        &self,
        case: GrammaticalCase,
        number: Option<GrammaticalNumber>,
    ) -> Option<&'static str> {
        self.forms
            .iter()
            .find(|form| form.case == case && form.number == number)
            .map(|form| form.text)
    }

    fn from_row(row: &table::EntryRow) -> Self {
        let mut forms = Vec::new();
        for (number, paradigm) in row.paradigms {
            for (case, spellings) in GrammaticalCase::ALL.iter().zip(paradigm.iter()) {
                for &text in spellings.iter() {
                    forms.push(SurfaceForm {
                        text,
                        case: *case,
                        number: *number,
                    });
                }
            }
        }

        let mut forms_by_case: BTreeMap<GrammaticalCase, Vec<&'static str>> = BTreeMap::new();
        for form in &forms {
            let bucket = forms_by_case.entry(form.case).or_default();
            if !bucket.contains(&form.text) {
                bucket.push(form.text);
            }
        }

        Self {
            canonical_form: row.canonical,
            value: row.value,
            class: row.class,
            gender: row.gender,
            forms_by_case,
            forms,
        }
    }
}

/// A single grammatical interpretation of a surface form.
#[derive(Debug, Clone, Copy)]
pub struct Reading<'a> {
    pub entry: &'a NumeralEntry,
    pub case: GrammaticalCase,
    pub number: Option<GrammaticalNumber>,
}

/// Immutable table of numeral entries with a case-insensitive surface-form
/// index.
///
/// Built once with [`Lexicon::new`] and shared by reference; nothing mutates
/// it after construction, so it can be used from several threads at once.
#[derive(Debug, Clone)]
pub struct Lexicon {
    entries: Vec<NumeralEntry>,
    /// surface form -> (entry index, form index), in population order
    index: HashMap<&'static str, Vec<(usize, usize)>>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl Lexicon {
    pub fn new() -> Self {
        let entries: Vec<NumeralEntry> = table::ENTRIES.iter().map(NumeralEntry::from_row).collect();

        let mut index: HashMap<&'static str, Vec<(usize, usize)>> = HashMap::new();
        for (entry_idx, entry) in entries.iter().enumerate() {
            for (form_idx, form) in entry.forms.iter().enumerate() {
                index.entry(form.text).or_default().push((entry_idx, form_idx));
            }
        }

        tracing::trace!(
            entries = entries.len(),
            surface_forms = index.len(),
            "lexicon built"
        );

        Self { entries, index }
    }

    pub fn entries(&self) -> &[NumeralEntry] {
        &self.entries
    }

    /// Entry by its canonical form
    pub fn entry(&self, canonical_form: &str) -> Option<&NumeralEntry> {
        let canonical_form = canonical_form.to_lowercase();
        self.entries
            .iter()
            .find(|entry| entry.canonical_form == canonical_form)
    }

    /// First entry owning `word` as one of its forms, ignoring letter case.
    pub fn lookup(&self, word: &str) -> Option<&NumeralEntry> {
        self.hits(word)
            .and_then(|hits| hits.first())
            .map(|(entry_idx, _)| &self.entries[*entry_idx])
    }

    /// Every entry, case and number `word` can be read as, in population order.
    pub fn readings(&self, word: &str) -> Vec<Reading<'_>> {
        self.hits(word)
            .map(|hits| {
                hits.iter()
                    .map(|(entry_idx, form_idx)| {
                        let entry = &self.entries[*entry_idx];
                        let form = &entry.forms[*form_idx];
                        Reading {
                            entry,
                            case: form.case,
                            number: form.number,
                        }
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn value_of(&self, word: &str) -> Option<i64> {
        self.lookup(word).map(|entry| entry.value)
    }

    pub fn is_numeral(&self, word: &str) -> bool {
        self.hits(word).is_some()
    }

    pub fn class_of(&self, word: &str) -> Option<NumeralClass> {
        self.lookup(word).map(|entry| entry.class)
    }

    pub fn gender_of(&self, word: &str) -> Option<Gender> {
        self.lookup(word).and_then(|entry| entry.gender)
    }

    /// Forms of the entry `word` belongs to, in the given case.
    pub fn forms_for(&self, word: &str, case: GrammaticalCase) -> &[&'static str] {
        self.lookup(word)
            .map(|entry| entry.forms_in(case))
            .unwrap_or(&[])
    }

    fn hits(&self, word: &str) -> Option<&Vec<(usize, usize)>> {
        let word = word.trim();
        if word.is_empty() {
            return None;
        }
        if let Some(hits) = self.index.get(word) {
            return Some(hits);
        }
        self.index.get(word.to_lowercase().as_str())
    }
}

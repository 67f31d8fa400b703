//! English → Arabic lookup tables for the bilingual labels.
//!
//! Lookups are fail-open: a value without an entry is displayed as given.

use std::collections::HashMap;

/// Which lookup table to consult.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Nationality,
    Religion,
    MaritalStatus,
    Gender,
    Profession,
    Education,
    Language,
    Skill,
}

/// Immutable set of lookup tables, built once and handed to the renderer.
#[derive(Debug, Clone, Default)]
pub struct TranslationTables {
    tables: HashMap<Table, HashMap<String, String>>,
}

impl TranslationTables {
    /// Empty tables: every lookup passes through.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The tables used by the agency's CV template.
    pub fn builtin() -> Self {
        Self::empty()
            .with_entries(
                Table::Nationality,
                &[
                    ("Uganda", "أوغندا"),
                    ("Kenya", "كينيا"),
                    ("Philippines", "الفلبين"),
                    ("India", "الهند"),
                    ("Ethiopia", "إثيوبيا"),
                    ("Bangladesh", "بنغلاديش"),
                ],
            )
            .with_entries(Table::Religion, &[("Muslim", "مسلم/ة"), ("Christian", "مسيحي/ة")])
            .with_entries(
                Table::MaritalStatus,
                &[
                    ("Single", "أعزب/عزباء"),
                    ("Married", "متزوج/ة"),
                    ("Divorced", "مطلق/ة"),
                    ("Widowed", "أرمل/ة"),
                ],
            )
            .with_entries(Table::Gender, &[("Male", "ذكر"), ("Female", "أنثى")])
            .with_entries(
                Table::Profession,
                &[("Domestic Worker", "عاملة منزلية"), ("Private Driver", "سائق خاص")],
            )
            .with_entries(
                Table::Education,
                &[
                    ("Primary", "ابتدائي"),
                    ("Secondary", "ثانوي"),
                    ("High School", "ثانوية عامة"),
                    ("Diploma", "دبلوم"),
                    ("Bachelor", "بكالوريوس"),
                    ("None", "لا يوجد"),
                ],
            )
            .with_entries(
                Table::Language,
                &[
                    ("Poor", "ضعيف"),
                    ("Fair", "مقبول"),
                    ("Good", "جيد"),
                    ("Excellent", "ممتاز"),
                    ("Fluent", "بطلاقة"),
                ],
            )
            .with_entries(
                Table::Skill,
                &[
                    ("Poor", "ضعيف"),
                    ("Good", "جيد"),
                    ("Very Good", "جيد جداً"),
                    ("Excellent", "ممتاز"),
                ],
            )
    }

    /// Add or replace entries of one table.
    pub fn with_entries(mut self, table: Table, entries: &[(&str, &str)]) -> Self {
        let map = self.tables.entry(table).or_default();
        for (source, target) in entries {
            map.insert((*source).to_string(), (*target).to_string());
        }
        self
    }

    /// Translate `value`, or return it unchanged when the table has no entry.
    pub fn translate<'a>(&'a self, table: Table, value: &'a str) -> &'a str {
        self.tables
            .get(&table)
            .and_then(|map| map.get(value))
            .map(String::as_str)
            .unwrap_or(value)
    }

    /// `"<arabic> / <english>"`, as used in the two-column info tables.
    pub fn bilingual(&self, table: Table, value: &str) -> String {
        format!("{} / {}", self.translate(table, value), value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values_translate() {
        let tables = TranslationTables::builtin();
        assert_eq!(tables.translate(Table::Nationality, "Kenya"), "كينيا");
        assert_eq!(tables.translate(Table::Skill, "Very Good"), "جيد جداً");
        assert_eq!(tables.translate(Table::Language, "Fluent"), "بطلاقة");
    }

    #[test]
    fn test_unknown_values_pass_through() {
        let tables = TranslationTables::builtin();
        assert_eq!(tables.translate(Table::Nationality, "Narnia"), "Narnia");
        assert_eq!(tables.translate(Table::Gender, ""), "");
        assert_eq!(tables.translate(Table::Skill, "Fluent"), "Fluent");
    }

    #[test]
    fn test_injected_entries() {
        let tables = TranslationTables::empty().with_entries(Table::Nationality, &[("Nepal", "نيبال")]);
        assert_eq!(tables.translate(Table::Nationality, "Nepal"), "نيبال");
        assert_eq!(tables.translate(Table::Nationality, "Kenya"), "Kenya");
        assert_eq!(tables.bilingual(Table::Nationality, "Nepal"), "نيبال / Nepal");
    }
}

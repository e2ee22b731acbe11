//! Train category flags and filtering.

use std::collections::BTreeSet;
use std::fmt;

use super::train::TrainEntry;

/// A train service class, identified by the leading letter of the train code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TrainCategory {
    /// 高铁, "G" trains.
    HighSpeed,
    /// 动车, "D" trains.
    Emu,
    /// 特快, "T" trains.
    Express,
    /// 快速, "K" trains.
    Fast,
    /// 直达, "Z" trains.
    Direct,
}

impl TrainCategory {
    /// All categories.
    pub const ALL: [TrainCategory; 5] = [
        TrainCategory::HighSpeed,
        TrainCategory::Emu,
        TrainCategory::Express,
        TrainCategory::Fast,
        TrainCategory::Direct,
    ];

    /// The lowercase flag letter for this category.
    pub fn letter(self) -> char {
        match self {
            TrainCategory::HighSpeed => 'g',
            TrainCategory::Emu => 'd',
            TrainCategory::Express => 't',
            TrainCategory::Fast => 'k',
            TrainCategory::Direct => 'z',
        }
    }

    /// Look up a category by flag letter, case-insensitively.
    pub fn from_letter(c: char) -> Option<Self> {
        let c = c.to_ascii_lowercase();
        Self::ALL.into_iter().find(|cat| cat.letter() == c)
    }
}

impl fmt::Display for TrainCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TrainCategory::HighSpeed => "高铁",
            TrainCategory::Emu => "动车",
            TrainCategory::Express => "特快",
            TrainCategory::Fast => "快速",
            TrainCategory::Direct => "直达",
        };
        f.write_str(name)
    }
}

/// The set of active category flags.
///
/// An empty filter includes every train.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryFilter {
    active: BTreeSet<TrainCategory>,
}

impl CategoryFilter {
    /// A filter that includes every train.
    pub fn all() -> Self {
        Self::default()
    }

    /// True if no flag is active.
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Iterate over the active categories.
    pub fn iter(&self) -> impl Iterator<Item = TrainCategory> + '_ {
        self.active.iter().copied()
    }

    /// Whether a train code passes the filter.
    pub fn accepts(&self, train_code: &str) -> bool {
        if self.active.is_empty() {
            return true;
        }
        train_code
            .chars()
            .next()
            .and_then(TrainCategory::from_letter)
            .is_some_and(|cat| self.active.contains(&cat))
    }

    /// Keep the entries whose train code passes the filter, in order.
    pub fn apply(&self, entries: Vec<TrainEntry>) -> Vec<TrainEntry> {
        if self.active.is_empty() {
            return entries;
        }
        entries
            .into_iter()
            .filter(|e| self.accepts(&e.train_code))
            .collect()
    }
}

impl FromIterator<TrainCategory> for CategoryFilter {
    fn from_iter<I: IntoIterator<Item = TrainCategory>>(iter: I) -> Self {
        Self {
            active: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::train::test_support::entry;

    fn codes(entries: &[TrainEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.train_code.as_str()).collect()
    }

    #[test]
    fn letters_roundtrip() {
        for cat in TrainCategory::ALL {
            assert_eq!(TrainCategory::from_letter(cat.letter()), Some(cat));
            assert_eq!(
                TrainCategory::from_letter(cat.letter().to_ascii_uppercase()),
                Some(cat)
            );
        }
        assert_eq!(TrainCategory::from_letter('c'), None);
    }

    #[test]
    fn empty_filter_includes_all_in_order() {
        let entries = vec![entry("K303"), entry("G101"), entry("C2001")];
        let kept = CategoryFilter::all().apply(entries);
        assert_eq!(codes(&kept), ["K303", "G101", "C2001"]);
    }

    #[test]
    fn single_flag_matches_leading_letter() {
        let filter: CategoryFilter = [TrainCategory::HighSpeed].into_iter().collect();
        let entries = vec![entry("G101"), entry("D202"), entry("g7"), entry("K303")];
        let kept = filter.apply(entries);
        assert_eq!(codes(&kept), ["G101", "g7"]);
    }

    #[test]
    fn multiple_flags_keep_original_order() {
        let filter: CategoryFilter = [TrainCategory::Emu, TrainCategory::HighSpeed]
            .into_iter()
            .collect();
        let entries = vec![entry("G101"), entry("D202"), entry("K303")];
        let kept = filter.apply(entries);
        assert_eq!(codes(&kept), ["G101", "D202"]);
    }

    #[test]
    fn active_filter_rejects_unknown_and_empty_codes() {
        let filter: CategoryFilter = [TrainCategory::Fast].into_iter().collect();
        assert!(!filter.accepts("C2001"));
        assert!(!filter.accepts(""));
        assert!(filter.accepts("k1"));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// The empty filter accepts any train code
        #[test]
        fn empty_accepts_anything(code in "\\PC{0,8}") {
            prop_assert!(CategoryFilter::all().accepts(&code));
        }

        /// A filter accepts a code iff its leading letter is active
        #[test]
        fn accepts_iff_letter_active(
            flags in proptest::collection::btree_set(0usize..5, 1..5),
            letter in "[A-Za-z]",
            digits in "[0-9]{1,4}",
        ) {
            let filter: CategoryFilter = flags.iter().map(|&i| TrainCategory::ALL[i]).collect();
            let code = format!("{letter}{digits}");
            let expected = TrainCategory::from_letter(letter.chars().next().unwrap())
                .is_some_and(|cat| filter.iter().any(|c| c == cat));
            prop_assert_eq!(filter.accepts(&code), expected);
        }
    }
}

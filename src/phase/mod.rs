//! Clinical trial phase labels.
//!
//! Labels are free text ("Phase 2", "Phase 1/Phase 2", ""). Every `Phase <d>`
//! token in a label is recognized and the highest one wins; anything else
//! degrades to `Phase::Unrecognized`.

use std::collections::BTreeSet;

const PHASE_TOKEN: &str = "Phase ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Phase {
    Unrecognized = 0,
    I = 1,
    II = 2,
    III = 3,
    IV = 4,
}

impl Phase {
    pub fn rank(self) -> u8 {
        self as u8
    }

    fn from_digit(c: char) -> Option<Self> {
        match c {
            '1' => Some(Self::I),
            '2' => Some(Self::II),
            '3' => Some(Self::III),
            '4' => Some(Self::IV),
            _ => None,
        }
    }
}

pub fn normalize_label(label: &str) -> Phase {
    label
        .match_indices(PHASE_TOKEN)
        .filter_map(|(pos, _)| label[pos + PHASE_TOKEN.len()..].chars().next())
        .filter_map(Phase::from_digit)
        .max()
        .unwrap_or(Phase::Unrecognized)
}

/// Comma-separated label list to the set of ranks it denotes. An empty list
/// still yields `{Unrecognized}`.
pub fn parse_phase_list(phases: &str) -> BTreeSet<Phase> {
    phases.split(',').map(normalize_label).collect()
}

pub fn highest_phase(phases: &BTreeSet<Phase>) -> Phase {
    phases.iter().copied().max().unwrap_or(Phase::Unrecognized)
}

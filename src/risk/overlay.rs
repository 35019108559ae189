//! Symptom-keyword overlay on top of ensemble probabilities.
//!
//! Deliberately a keyword search, not NLP: case-insensitive substring rules
//! add fixed boosts to individual diseases. The overlay is a pure function
//! of (base map, text) so reapplying it never double-counts.

use indexmap::IndexMap;

use crate::domain::Disease;

/// Boosted probabilities never reach certainty.
pub const CEILING: f64 = 0.999;

struct BoostRule {
    /// Rule fires when any of these substrings is present...
    any_of: &'static [&'static str],
    /// ...and all of these are present. Empty slice means no constraint.
    all_of: &'static [&'static str],
    disease: Disease,
    boost: f64,
}

const RULES: [BoostRule; 4] = [
    BoostRule {
        any_of: &["thirst", "urination"],
        all_of: &[],
        disease: Disease::Diabetes,
        boost: 0.30,
    },
    BoostRule {
        any_of: &["chest", "breath"],
        all_of: &[],
        disease: Disease::HeartDisease,
        boost: 0.30,
    },
    BoostRule {
        any_of: &[],
        all_of: &["headache", "vision"],
        disease: Disease::Hypertension,
        boost: 0.20,
    },
    BoostRule {
        any_of: &["lump"],
        all_of: &[],
        disease: Disease::Cancer,
        boost: 0.40,
    },
];

impl BoostRule {
    fn matches(&self, text: &str) -> bool {
        let any_ok = self.any_of.is_empty() || self.any_of.iter().any(|kw| text.contains(kw));
        let all_ok = self.all_of.iter().all(|kw| text.contains(kw));
        any_ok && all_ok
    }
}

/// Apply every matching rule once, additively, clamped at the ceiling.
///
/// Boosts for different diseases stack independently; a disease receives
/// its own rule's boost at most once per call.
pub fn apply(base: &IndexMap<Disease, f64>, symptom_text: &str) -> IndexMap<Disease, f64> {
    let text = symptom_text.to_lowercase();
    let mut boosted = base.clone();
    for rule in &RULES {
        if !rule.matches(&text) {
            continue;
        }
        let entry = boosted.entry(rule.disease).or_insert(0.0);
        *entry = (*entry + rule.boost).min(CEILING);
    }
    boosted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> IndexMap<Disease, f64> {
        Disease::VITALS_MODELED.into_iter().map(|d| (d, 0.2)).collect()
    }

    #[test]
    fn thirst_boosts_diabetes_only() {
        let boosted = apply(&base(), "Excessive THIRST since last week");
        assert!((boosted[&Disease::Diabetes] - 0.5).abs() < 1e-9);
        assert!((boosted[&Disease::HeartDisease] - 0.2).abs() < 1e-9);
    }

    #[test]
    fn hypertension_rule_needs_both_keywords() {
        let only_headache = apply(&base(), "bad headache");
        assert!((only_headache[&Disease::Hypertension] - 0.2).abs() < 1e-9);
        let both = apply(&base(), "headache with blurred vision");
        assert!((both[&Disease::Hypertension] - 0.4).abs() < 1e-9);
    }

    #[test]
    fn boost_is_clamped_at_ceiling() {
        let mut high = base();
        high.insert(Disease::Diabetes, 0.95);
        let boosted = apply(&high, "constant thirst");
        assert!((boosted[&Disease::Diabetes] - CEILING).abs() < 1e-9);
    }

    #[test]
    fn each_rule_adds_its_boost_exactly_once() {
        let boosted = apply(&base(), "chest pain, short of breath, thirst, thirst");
        // Repeated keywords and multiple any_of hits still boost once.
        assert!((boosted[&Disease::Diabetes] - 0.5).abs() < 1e-9);
        assert!((boosted[&Disease::HeartDisease] - 0.5).abs() < 1e-9);
        assert!((boosted[&Disease::Hypertension] - 0.2).abs() < 1e-9);
        assert!((boosted[&Disease::Cancer] - 0.2).abs() < 1e-9);
        assert!((boosted[&Disease::RareDisease] - 0.2).abs() < 1e-9);
    }
}

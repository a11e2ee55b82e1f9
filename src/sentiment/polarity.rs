//! Pattern-style polarity / subjectivity scorer: averages the scores of the
//! adjectives it knows, scaled by a preceding intensifier and flipped (at half
//! strength) by a preceding negation.

use super::lexicon::{INTENSIFIERS, NEGATIONS, POLARITIES};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

const NEGATION_FACTOR: f64 = -0.5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PolarityScores {
    pub polarity: f64,
    pub subjectivity: f64,
}

pub struct PolarityAnalyzer {
    words: HashMap<&'static str, (f64, f64)>,
    intensifiers: HashMap<&'static str, f64>,
    negations: HashSet<&'static str>,
}

impl Default for PolarityAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl PolarityAnalyzer {
    pub fn new() -> Self {
        Self {
            words: POLARITIES.iter().map(|(w, p, s)| (*w, (*p, *s))).collect(),
            intensifiers: INTENSIFIERS.iter().copied().collect(),
            negations: NEGATIONS.iter().copied().collect(),
        }
    }

    pub fn sentiment(&self, text: &str) -> PolarityScores {
        let text = text.replace('\u{2019}', "'").to_lowercase();
        let words = text
            .split(|c: char| !(c.is_alphanumeric() || c == '\''))
            .map(|w| w.trim_matches('\''))
            .filter(|w| !w.is_empty());

        let mut scored: Vec<(f64, f64)> = Vec::new();
        let mut intensity = 1.0;
        let mut negated = false;

        for word in words {
            if let Some(m) = self.intensifiers.get(word) {
                intensity *= m;
                continue;
            }
            if word.ends_with("n't") || self.negations.contains(word.replace('\'', "").as_str()) {
                negated = true;
                continue;
            }
            if let Some(&(polarity, subjectivity)) = self.words.get(word) {
                let mut p = polarity * intensity;
                if negated {
                    p *= NEGATION_FACTOR;
                }
                scored.push((p.clamp(-1.0, 1.0), (subjectivity * intensity).clamp(0.0, 1.0)));
            }
            intensity = 1.0;
            negated = false;
        }

        if scored.is_empty() {
            return PolarityScores::default();
        }
        let n = scored.len() as f64;
        PolarityScores {
            polarity: (scored.iter().map(|(p, _)| p).sum::<f64>() / n).clamp(-1.0, 1.0),
            subjectivity: (scored.iter().map(|(_, s)| s).sum::<f64>() / n).clamp(0.0, 1.0),
        }
    }
}

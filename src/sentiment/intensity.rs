//! Lexicon and rule based intensity scorer (negative / neutral / positive /
//! compound), after Hutto & Gilbert's VADER.

use super::lexicon::{BOOST_DOWN, BOOST_UP, NEGATIONS, VALENCES};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

const BOOST_INCREMENT: f64 = 0.293;
const CAPS_INCREMENT: f64 = 0.733;
const NEGATION_SCALAR: f64 = -0.74;
const EXCLAMATION_INCREMENT: f64 = 0.292;
const QUESTION_INCREMENT: f64 = 0.18;
const NORMALIZATION_ALPHA: f64 = 15.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct IntensityScores {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    pub compound: f64,
}

pub struct IntensityAnalyzer {
    valences: HashMap<&'static str, f64>,
    boosters: HashMap<&'static str, f64>,
    negations: HashSet<&'static str>,
}

impl Default for IntensityAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl IntensityAnalyzer {
    pub fn new() -> Self {
        let boosters = BOOST_UP
            .iter()
            .map(|w| (*w, BOOST_INCREMENT))
            .chain(BOOST_DOWN.iter().map(|w| (*w, -BOOST_INCREMENT)))
            .collect();
        Self {
            valences: VALENCES.iter().copied().collect(),
            boosters,
            negations: NEGATIONS.iter().copied().collect(),
        }
    }

    pub fn polarity_scores(&self, text: &str) -> IntensityScores {
        let text = text.replace('\u{2019}', "'");
        let tokens: Vec<&str> = text
            .split_whitespace()
            .map(strip_punctuation)
            .filter(|t| !t.is_empty())
            .collect();
        let lowered: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();
        let cap_differential = has_cap_differential(&tokens);

        let mut valences = Vec::with_capacity(tokens.len());
        for (i, word) in lowered.iter().enumerate() {
            let base = match self.valences.get(word.as_str()) {
                Some(v) if !self.boosters.contains_key(word.as_str()) => *v,
                _ => {
                    valences.push(0.0);
                    continue;
                }
            };

            let mut valence = base;
            if cap_differential && is_all_caps(tokens[i]) {
                valence += CAPS_INCREMENT.copysign(valence);
            }

            for dist in 1..=3usize {
                if i < dist {
                    break;
                }
                let prev = lowered[i - dist].as_str();
                if !self.valences.contains_key(prev) {
                    let damping = match dist {
                        1 => 1.0,
                        2 => 0.95,
                        _ => 0.9,
                    };
                    valence += damping * self.booster_scalar(prev, tokens[i - dist], valence, cap_differential);
                }
                if self.is_negation(prev) {
                    valence *= NEGATION_SCALAR;
                }
            }

            valences.push(valence);
        }

        // Contrast: "but" dampens what precedes it and stresses what follows
        if let Some(pivot) = lowered.iter().position(|w| w == "but") {
            for (i, v) in valences.iter_mut().enumerate() {
                if i < pivot {
                    *v *= 0.5;
                } else if i > pivot {
                    *v *= 1.5;
                }
            }
        }

        score_valences(&valences, &text)
    }

    fn booster_scalar(&self, word: &str, raw: &str, valence: f64, cap_differential: bool) -> f64 {
        let Some(&boost) = self.boosters.get(word) else {
            return 0.0;
        };
        let mut scalar = if valence < 0.0 { -boost } else { boost };
        if cap_differential && is_all_caps(raw) {
            scalar += CAPS_INCREMENT.copysign(valence);
        }
        scalar
    }

    fn is_negation(&self, word: &str) -> bool {
        word.contains("n't") || self.negations.contains(word.replace('\'', "").as_str())
    }
}

fn score_valences(valences: &[f64], text: &str) -> IntensityScores {
    if valences.is_empty() {
        return IntensityScores::default();
    }

    let emphasis = punctuation_emphasis(text);
    let mut sum: f64 = valences.iter().sum();
    if sum > 0.0 {
        sum += emphasis;
    } else if sum < 0.0 {
        sum -= emphasis;
    }
    let compound = (sum / (sum * sum + NORMALIZATION_ALPHA).sqrt()).clamp(-1.0, 1.0);

    let mut pos_sum = 0.0;
    let mut neg_sum = 0.0;
    let mut neutral = 0.0;
    for &v in valences {
        if v > 0.0 {
            pos_sum += v + 1.0;
        } else if v < 0.0 {
            neg_sum += v - 1.0;
        } else {
            neutral += 1.0;
        }
    }
    if pos_sum > neg_sum.abs() {
        pos_sum += emphasis;
    } else if pos_sum < neg_sum.abs() {
        neg_sum -= emphasis;
    }

    let total = pos_sum + neg_sum.abs() + neutral;
    IntensityScores {
        neg: round_to((neg_sum / total).abs(), 3),
        neu: round_to(neutral / total, 3),
        pos: round_to((pos_sum / total).abs(), 3),
        compound: round_to(compound, 4),
    }
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(4) as f64;
    let questions = text.matches('?').count();
    let question_boost = match questions {
        0 | 1 => 0.0,
        2..=3 => questions as f64 * QUESTION_INCREMENT,
        _ => 0.96,
    };
    exclamations * EXCLAMATION_INCREMENT + question_boost
}

fn strip_punctuation(token: &str) -> &str {
    token.trim_matches(|c: char| !c.is_alphanumeric())
}

fn is_all_caps(token: &str) -> bool {
    token.chars().any(char::is_alphabetic)
        && token.chars().filter(|c| c.is_alphabetic()).all(char::is_uppercase)
}

fn has_cap_differential(tokens: &[&str]) -> bool {
    let caps = tokens.iter().filter(|t| is_all_caps(t)).count();
    caps > 0 && caps < tokens.len()
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

//! Per-line sentiment annotation with two independent scorers.

pub mod intensity;
mod lexicon;
pub mod polarity;

pub use intensity::{IntensityAnalyzer, IntensityScores};
pub use polarity::{PolarityAnalyzer, PolarityScores};

use crate::script::ScriptLine;
use serde::{Deserialize, Serialize};

const PROGRESS_EVERY: usize = 5_000;

/// Both scores for one line of dialogue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    pub sia_neg: f64,
    pub sia_neu: f64,
    pub sia_pos: f64,
    pub sia_compound: f64,
    pub tb_polarity: f64,
    pub tb_subjectivity: f64,
}

#[derive(Default)]
pub struct SentimentAnnotator {
    intensity: IntensityAnalyzer,
    polarity: PolarityAnalyzer,
}

impl SentimentAnnotator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(&self, text: &str) -> Sentiment {
        let i = self.intensity.polarity_scores(text);
        let p = self.polarity.sentiment(text);
        Sentiment {
            sia_neg: i.neg,
            sia_neu: i.neu,
            sia_pos: i.pos,
            sia_compound: i.compound,
            tb_polarity: p.polarity,
            tb_subjectivity: p.subjectivity,
        }
    }

    /// Score every line in place. Scoring is total, so there is no per-row
    /// failure path.
    pub fn annotate(&self, lines: &mut [ScriptLine]) {
        let total = lines.len();
        log::info!("Starting sentiment analysis of {} lines", total);
        for (i, line) in lines.iter_mut().enumerate() {
            line.sentiment = Some(self.score(&line.line));
            if (i + 1) % PROGRESS_EVERY == 0 {
                log::info!("Sentiment: {}/{} lines scored", i + 1, total);
            }
        }
        log::info!("Sentiment analysis done");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn script_line(text: &str) -> ScriptLine {
        ScriptLine {
            scene_number: Some(0),
            character: "Monica".to_string(),
            line: text.to_string(),
            sentiment: None,
        }
    }

    #[test]
    fn test_scorers_agree_on_positive_line() {
        let s = SentimentAnnotator::new().score("I'm so happy for you!");
        assert!(s.sia_compound > 0.0);
        assert!(s.tb_polarity > 0.0);
    }

    #[test]
    fn test_scorers_agree_on_negative_line() {
        let s = SentimentAnnotator::new().score("This is terrible, I feel awful.");
        assert!(s.sia_compound < 0.0);
        assert!(s.tb_polarity < 0.0);
    }

    #[test]
    fn test_everyday_dialogue_is_scored() {
        let a = SentimentAnnotator::new();
        assert!(a.score("Congratulations!").sia_compound > 0.0);

        let nightmare = a.score("This is a nightmare.");
        assert!(nightmare.sia_compound < 0.0);
        assert!(nightmare.tb_polarity < 0.0);

        assert!(a.score("Oh my God, that's hilarious!").tb_polarity > 0.0);
    }

    #[test]
    fn test_annotate_fills_every_line() {
        let mut lines = vec![
            script_line("There's nothing to tell!"),
            script_line(""),
            script_line("How you doin\u{2019}?"),
        ];
        SentimentAnnotator::new().annotate(&mut lines);
        assert!(lines.iter().all(|l| l.sentiment.is_some()));
        assert_eq!(lines[1].sentiment, Some(Sentiment::default()));
    }

    #[test]
    fn test_score_is_pure() {
        let a = SentimentAnnotator::new();
        assert_eq!(a.score("We were on a break!"), a.score("We were on a break!"));
    }
}

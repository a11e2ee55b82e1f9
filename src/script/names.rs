//! Character name normalization.

use regex::Regex;

const MAIN_NAMES: &str = "Ross|Rachel|Monica|Joey|Chandler|Phoebe";

/// Uppercase spellings found in the transcript. `RACHELL` is a misspelling
/// that shows up in some of the all-caps sections.
const UPPERCASE_NAMES: &[(&str, &str)] = &[
    ("MONICA", "Monica"),
    ("CHANDLER", "Chandler"),
    ("JOEY", "Joey"),
    ("PHOEBE", "Phoebe"),
    ("RACHELL", "Rachel"),
    ("RACHEL", "Rachel"),
    ("ROSS", "Ross"),
];

const ABBREVIATED_NAMES: &[(&str, &str)] = &[
    ("MNCA", "Monica"),
    ("CHAN", "Chandler"),
    ("JOEY", "Joey"),
    ("PHOE", "Phoebe"),
    ("RACH", "Rachel"),
    ("ROSS", "Ross"),
];

struct Rule {
    pattern: Regex,
    replacement: String,
}

/// Ordered (pattern, replacement) rules applied in a single pass.
///
/// Each rule sees the output of the previous one; no rule is revisited.
pub struct NameNormalizer {
    rules: Vec<Rule>,
}

impl NameNormalizer {
    pub fn new() -> Result<Self, regex::Error> {
        let mut rules = vec![
            // "Ross (to Rachel)" -> "Ross"
            Rule {
                pattern: Regex::new(&format!(r"^({}) \(.+", MAIN_NAMES))?,
                replacement: "$1".to_string(),
            },
            // "Ross " -> "Ross"
            Rule {
                pattern: Regex::new(&format!(r"^({}) $", MAIN_NAMES))?,
                replacement: "$1".to_string(),
            },
        ];

        for (from, to) in UPPERCASE_NAMES.iter().chain(ABBREVIATED_NAMES) {
            rules.push(Rule {
                pattern: Regex::new(&format!("^{}$", regex::escape(from)))?,
                replacement: (*to).to_string(),
            });
        }

        Ok(Self { rules })
    }

    pub fn normalize(&self, name: &str) -> String {
        self.rules.iter().fold(name.to_string(), |acc, rule| {
            rule.pattern
                .replace(&acc, rule.replacement.as_str())
                .into_owned()
        })
    }

    /// Normalize a whole column in place. Returns how many names changed.
    pub fn normalize_all<'a, I>(&self, names: I) -> usize
    where
        I: IntoIterator<Item = &'a mut String>,
    {
        let mut changed = 0;
        for name in names {
            let normalized = self.normalize(name);
            if normalized != *name {
                *name = normalized;
                changed += 1;
            }
        }
        changed
    }
}

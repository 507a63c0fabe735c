use crate::models::SentimentLabel;

/// Maps free text to one of the three sentiment labels.
///
/// Callers are responsible for rejecting blank input before classifying.
pub trait SentimentClassifier: Send + Sync {
    fn classify(&self, text: &str) -> SentimentLabel;
}

const NEGATORS: &[&str] = &["not", "no", "never", "nothing", "nobody", "hardly", "without"];

const INTENSIFIERS: &[&str] = &["very", "really", "so", "extremely", "totally", "super"];

const INTENSITY: f64 = 1.3;

const LEXICON: &[(&str, f64)] = &[
    ("amazing", 0.6),
    ("awesome", 1.0),
    ("beautiful", 0.85),
    ("best", 1.0),
    ("better", 0.5),
    ("brilliant", 0.9),
    ("calm", 0.3),
    ("cheerful", 0.7),
    ("delighted", 0.8),
    ("enjoy", 0.4),
    ("enjoyed", 0.4),
    ("excellent", 1.0),
    ("excited", 0.4),
    ("fantastic", 0.4),
    ("fine", 0.4),
    ("fun", 0.3),
    ("glad", 0.5),
    ("good", 0.7),
    ("grateful", 0.6),
    ("great", 0.8),
    ("happy", 0.8),
    ("hope", 0.3),
    ("joy", 0.8),
    ("kind", 0.6),
    ("love", 0.5),
    ("loved", 0.7),
    ("lovely", 0.5),
    ("nice", 0.6),
    ("perfect", 1.0),
    ("pleased", 0.5),
    ("proud", 0.8),
    ("relaxed", 0.4),
    ("smile", 0.3),
    ("wonderful", 1.0),
    ("angry", -0.5),
    ("annoyed", -0.4),
    ("anxious", -0.25),
    ("awful", -1.0),
    ("bad", -0.7),
    ("bored", -0.5),
    ("boring", -1.0),
    ("cry", -0.4),
    ("depressed", -0.6),
    ("disappointed", -0.75),
    ("exhausted", -0.4),
    ("hate", -0.8),
    ("horrible", -1.0),
    ("hurt", -0.5),
    ("lonely", -0.5),
    ("lost", -0.3),
    ("miserable", -1.0),
    ("pain", -0.6),
    ("sad", -0.5),
    ("scared", -0.6),
    ("sick", -0.7),
    ("stressed", -0.5),
    ("terrible", -1.0),
    ("tired", -0.4),
    ("upset", -0.6),
    ("worried", -0.4),
    ("worse", -0.4),
    ("worst", -1.0),
];

/// Lexical polarity scorer. Each known word carries a polarity in [-1, 1];
/// a preceding negator flips and halves it, a preceding intensifier scales
/// it. The text's polarity is the mean over the known words it contains.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconClassifier;

impl LexiconClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn polarity(&self, text: &str) -> f64 {
        let lowered = text.to_lowercase().replace('\u{2019}', "'");
        let tokens: Vec<&str> = lowered
            .split(|c: char| !(c.is_alphanumeric() || c == '\''))
            .filter(|token| !token.is_empty())
            .collect();

        let mut sum = 0.0;
        let mut hits = 0usize;
        for (idx, token) in tokens.iter().enumerate() {
            let Some(mut score) = word_polarity(token) else {
                continue;
            };

            let prev = idx.checked_sub(1).map(|i| tokens[i]);
            let before_prev = idx.checked_sub(2).map(|i| tokens[i]);

            if prev.is_some_and(is_intensifier) {
                score *= INTENSITY;
                if before_prev.is_some_and(is_negator) {
                    score *= -0.5;
                }
            } else if prev.is_some_and(is_negator) {
                score *= -0.5;
            }

            sum += score.clamp(-1.0, 1.0);
            hits += 1;
        }

        if hits == 0 {
            return 0.0;
        }
        (sum / hits as f64).clamp(-1.0, 1.0)
    }
}

impl SentimentClassifier for LexiconClassifier {
    fn classify(&self, text: &str) -> SentimentLabel {
        label_for_polarity(self.polarity(text))
    }
}

pub fn label_for_polarity(score: f64) -> SentimentLabel {
    if score > 0.0 {
        SentimentLabel::Happy
    } else if score < 0.0 {
        SentimentLabel::Sad
    } else {
        SentimentLabel::Neutral
    }
}

fn word_polarity(word: &str) -> Option<f64> {
    LEXICON
        .iter()
        .find(|(entry, _)| *entry == word)
        .map(|(_, score)| *score)
}

fn is_negator(word: &str) -> bool {
    NEGATORS.contains(&word) || word.ends_with("n't")
}

fn is_intensifier(word: &str) -> bool {
    INTENSIFIERS.contains(&word)
}

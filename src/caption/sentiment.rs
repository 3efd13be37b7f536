//! Lexicon-based compound sentiment score.
//!
//! Each word contributes its lexicon valence, adjusted by the up-to-three words
//! before it (boosters, dampeners, negations) and by ALL-CAPS emphasis. A
//! contrastive "but" halves everything before it and amplifies everything after
//! it. The sum is pushed away from zero by exclamation marks and squashed into
//! [-1, 1] with `s / sqrt(s^2 + ALPHA)`.

use super::lexicon::{BOOSTERS, NEGATIONS, VALENCES};
use super::{fold, tokenize};
use std::collections::{HashMap, HashSet};

const ALPHA: f64 = 15.0;
const BOOSTER_INCREMENT: f64 = 0.293;
const CAPS_EMPHASIS: f64 = 0.733;
const NEGATION_SCALAR: f64 = -0.74;
const EXCLAMATION_EMPHASIS: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;
/// Booster weight by distance (1, 2, 3 words back).
const BOOSTER_DECAY: [f64; 3] = [1.0, 0.95, 0.9];

pub struct SentimentAnalyzer {
    valences: HashMap<&'static str, f64>,
    boosters: HashMap<&'static str, f64>,
    negations: HashSet<&'static str>,
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentAnalyzer {
    pub fn new() -> Self {
        Self {
            valences: VALENCES.iter().copied().collect(),
            boosters: BOOSTERS
                .iter()
                .map(|&(w, up)| (w, if up { BOOSTER_INCREMENT } else { -BOOSTER_INCREMENT }))
                .collect(),
            negations: NEGATIONS.iter().copied().collect(),
        }
    }

    /// Compound score in [-1, 1]. Exactly 0.0 when no word carries valence.
    pub fn compound(&self, text: &str) -> f64 {
        // same word tokens the caption filter sees, punctuation dropped
        let words: Vec<&str> = tokenize(text)
            .into_iter()
            .filter(|t| t.chars().next().is_some_and(char::is_alphanumeric))
            .collect();
        if words.is_empty() {
            return 0.0;
        }

        let lowered: Vec<String> = words.iter().map(|w| fold(w)).collect();
        let shouted = words.iter().filter(|w| is_shouting(w)).count();
        let mixed_case = shouted > 0 && shouted < words.len();

        let mut valences = Vec::with_capacity(words.len());
        for (i, word) in words.iter().enumerate() {
            let lower = lowered[i].as_str();
            if self.boosters.contains_key(lower) {
                valences.push(0.0);
                continue;
            }
            let Some(&base) = self.valences.get(lower) else {
                valences.push(0.0);
                continue;
            };

            let mut valence = base;
            if mixed_case && is_shouting(word) {
                valence += CAPS_EMPHASIS.copysign(base);
            }
            for (distance, decay) in BOOSTER_DECAY.iter().enumerate().map(|(d, w)| (d + 1, w)) {
                if i < distance {
                    break;
                }
                let prev = lowered[i - distance].as_str();
                if let Some(&scalar) = self.boosters.get(prev) {
                    let directed = if base < 0.0 { -scalar } else { scalar };
                    valence += directed * decay;
                }
                if self.is_negation(prev) {
                    valence *= NEGATION_SCALAR;
                }
            }
            valences.push(valence);
        }

        if let Some(pivot) = lowered.iter().position(|w| w == "but") {
            for (i, v) in valences.iter_mut().enumerate() {
                if i < pivot {
                    *v *= 0.5;
                } else if i > pivot {
                    *v *= 1.5;
                }
            }
        }

        let mut sum: f64 = valences.iter().sum();
        if sum != 0.0 {
            let bangs = text.matches('!').count().min(MAX_EXCLAMATIONS) as f64;
            sum += (bangs * EXCLAMATION_EMPHASIS).copysign(sum);
        }
        normalize(sum)
    }

    fn is_negation(&self, lower: &str) -> bool {
        if lower.ends_with("n't") {
            return true;
        }
        self.negations.contains(lower)
    }
}

fn is_shouting(word: &str) -> bool {
    let letters: Vec<char> = word.chars().filter(|c| c.is_alphabetic()).collect();
    letters.len() > 1 && letters.iter().all(|c| c.is_uppercase())
}

fn normalize(score: f64) -> f64 {
    if score == 0.0 {
        return 0.0;
    }
    (score / (score * score + ALPHA).sqrt()).clamp(-1.0, 1.0)
}

use crate::compose::ComposedImage;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// Strict three-way split at zero: 0.0 (and -0.0) is neutral.
    pub fn from_compound(score: f64) -> Self {
        if score > 0.0 {
            Sentiment::Positive
        } else if score < 0.0 {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Caption {
    pub text: String,
    pub sentiment: Sentiment,
}

impl fmt::Display for Caption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{text: {:?}, sentiment: {}}}", self.text, self.sentiment)
    }
}

/// Image slot on a content item.
#[derive(Debug, Clone, Default)]
pub enum ImageSlot {
    /// Composer has not run for this item.
    #[default]
    Pending,
    /// Composer ran but the asset or font was unusable.
    Missing,
    Ready(ComposedImage),
}

impl ImageSlot {
    pub fn image(&self) -> Option<&ComposedImage> {
        match self {
            ImageSlot::Ready(img) => Some(img),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, ImageSlot::Pending)
    }
}

/// One scraped article, enriched in place by each later stage.
#[derive(Debug, Clone)]
pub struct ContentItem {
    pub title: String,
    pub description: String,
    pub link: String,
    pub caption: Option<Caption>,
    pub image: ImageSlot,
    pub personalization: Vec<String>,
}

impl ContentItem {
    pub fn new(title: impl Into<String>, description: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            link: link.into(),
            caption: None,
            image: ImageSlot::Pending,
            personalization: Vec::new(),
        }
    }

    pub fn set_caption(&mut self, text: String, sentiment: Sentiment) {
        self.caption = Some(Caption { text, sentiment });
    }

    pub fn set_image(&mut self, slot: ImageSlot) {
        self.image = slot;
    }

    pub fn add_personalization(&mut self, preference: &str) {
        self.personalization.push(preference.to_string());
    }
}

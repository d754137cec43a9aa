use lorem_core::{Length, TextGenerator};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub mod datetime;

pub use datetime::{datetime, format_rfc3339, parse_utc, UnixSeconds};
pub use lorem_core::DEFAULT_SEED;

/// Largest unit count accepted in a request
pub const MAX_COUNT: f64 = 10_000.0;

/// Largest number of words a request may imply across all nested units
pub const MAX_TOTAL_WORDS: f64 = 1_000_000.0;

/// Largest request file accepted by [`TextRequest::load`]
const MAX_REQUEST_FILE_BYTES: u64 = 64 * 1024;

/// Unit of generated text
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Space-separated words, no punctuation
    Words,
    /// Punctuated sentences separated by spaces
    Sentences,
    /// Paragraphs of sentences separated by a blank line
    #[default]
    Paragraphs,
}

impl std::str::FromStr for Unit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "words" => Ok(Unit::Words),
            "sentences" => Ok(Unit::Sentences),
            "paragraphs" => Ok(Unit::Paragraphs),
            _ => Err(format!(
                "Invalid unit: '{}'. Must be 'words', 'sentences', or 'paragraphs'",
                s
            )),
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Unit::Words => write!(f, "words"),
            Unit::Sentences => write!(f, "sentences"),
            Unit::Paragraphs => write!(f, "paragraphs"),
        }
    }
}

/// Largest count a Gaussian draw is expected to reach (mean + 6 sigma).
fn upper_bound(mean: f64, deviation: f64) -> f64 {
    (mean + 6.0 * deviation.abs()).max(0.0)
}

fn default_sentence_count() -> f64 {
    Length::PARAGRAPH_SENTENCES.mean
}

fn default_sentence_deviation() -> f64 {
    Length::PARAGRAPH_SENTENCES.deviation
}

fn default_word_count() -> f64 {
    Length::SENTENCE_WORDS.mean
}

fn default_word_deviation() -> f64 {
    Length::SENTENCE_WORDS.deviation
}

/// A text generation request, as read from the CLI, a JSON file or the API.
///
/// `count`/`deviation` describe the requested unit. Sentence and word
/// lengths only apply to the units that contain them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TextRequest {
    #[serde(default)]
    pub unit: Unit,

    pub count: f64,

    #[serde(default)]
    pub deviation: f64,

    /// Sentences per paragraph
    #[serde(default = "default_sentence_count")]
    pub sentence_count: f64,

    #[serde(default = "default_sentence_deviation")]
    pub sentence_deviation: f64,

    /// Words per sentence
    #[serde(default = "default_word_count")]
    pub word_count: f64,

    #[serde(default = "default_word_deviation")]
    pub word_deviation: f64,

    /// Open the text with "lorem ipsum dolor sit amet..."
    #[serde(default)]
    pub fixed_start: bool,

    /// Generator seed; drawn from entropy when absent. Only the low 32 bits
    /// are used, so `-1` seeds the same stream as `4294967295`.
    #[serde(default)]
    pub seed: Option<i64>,
}

impl TextRequest {
    /// Request `count` units with default lengths and no deviation.
    pub fn new(unit: Unit, count: f64) -> Self {
        Self {
            unit,
            count,
            deviation: 0.0,
            sentence_count: default_sentence_count(),
            sentence_deviation: default_sentence_deviation(),
            word_count: default_word_count(),
            word_deviation: default_word_deviation(),
            fixed_start: false,
            seed: None,
        }
    }

    /// Reject non-finite parameters and counts that could not be served.
    pub fn validate(&self) -> Result<(), String> {
        let params = [
            ("count", self.count),
            ("deviation", self.deviation),
            ("sentence_count", self.sentence_count),
            ("sentence_deviation", self.sentence_deviation),
            ("word_count", self.word_count),
            ("word_deviation", self.word_deviation),
        ];
        for (name, value) in params {
            if !value.is_finite() {
                return Err(format!("Invalid {}: {} is not a finite number", name, value));
            }
        }

        // A deviation this large could still draw far beyond the cap;
        // bound mean + 6 sigma instead of the mean alone
        for (name, mean, deviation) in [
            ("count", self.count, self.deviation),
            ("sentence_count", self.sentence_count, self.sentence_deviation),
            ("word_count", self.word_count, self.word_deviation),
        ] {
            if upper_bound(mean, deviation) > MAX_COUNT {
                return Err(format!(
                    "Invalid {}: {} (deviation {}) may exceed the limit of {}",
                    name, mean, deviation, MAX_COUNT
                ));
            }
        }

        let total = self.max_total_words();
        if total > MAX_TOTAL_WORDS {
            return Err(format!(
                "Request may produce up to {:.0} words, more than the limit of {}",
                total, MAX_TOTAL_WORDS
            ));
        }

        Ok(())
    }

    /// Upper bound on the words this request can produce, multiplying the
    /// bounds of every unit the requested one is made of.
    pub fn max_total_words(&self) -> f64 {
        let units = upper_bound(self.count, self.deviation);
        let words = upper_bound(self.word_count, self.word_deviation);
        match self.unit {
            Unit::Words => units,
            Unit::Sentences => units * words,
            Unit::Paragraphs => {
                units * upper_bound(self.sentence_count, self.sentence_deviation) * words
            }
        }
    }

    pub fn sentence_length(&self) -> Length {
        Length::new(self.sentence_count, self.sentence_deviation)
    }

    pub fn word_length(&self) -> Length {
        Length::new(self.word_count, self.word_deviation)
    }

    /// Parse a request from JSON.
    pub fn from_json(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }

    /// Load a request from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Box<dyn std::error::Error>> {
        let path = path.as_ref();

        // Validate file size before reading it into memory
        let size = fs::metadata(path)?.len();
        if size > MAX_REQUEST_FILE_BYTES {
            return Err(format!(
                "Request file is too large: {} bytes (max {})",
                size, MAX_REQUEST_FILE_BYTES
            )
            .into());
        }

        let json = fs::read_to_string(path)?;
        let request = Self::from_json(&json)?;
        request.validate()?;
        Ok(request)
    }
}

/// Reduce an integer seed to the 32 bits the generator is seeded with.
pub fn truncate_seed(seed: i64) -> u32 {
    seed as u32
}

/// Output of [`generate_text`]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneratedText {
    /// The seed the text was generated from; replaying it reproduces `text`
    pub seed: u32,

    pub unit: Unit,

    /// Individual words, sentences or paragraphs
    pub items: Vec<String>,

    /// `items` joined with the unit's separator
    pub text: String,
}

/// Generate text for a request.
///
/// When the request has no seed, one is drawn from entropy first and
/// reported in the output, so any result can be regenerated.
///
/// # Example
/// ```no_run
/// use lorem::{generate_text, TextRequest, Unit};
///
/// let mut request = TextRequest::new(Unit::Sentences, 3.0);
/// request.seed = Some(47513);
/// let output = generate_text(&request).unwrap();
/// println!("{}", output.text);
/// ```
pub fn generate_text(request: &TextRequest) -> Result<GeneratedText, Box<dyn std::error::Error>> {
    request.validate()?;

    let seed = request
        .seed
        .map(truncate_seed)
        .unwrap_or_else(lorem_core::seed::entropy_seed);
    tracing::info!(
        "Generating {} (count {}, deviation {}) from seed {}",
        request.unit,
        request.count,
        request.deviation,
        seed
    );

    let mut gen = TextGenerator::new(Some(seed));
    let count = Length::new(request.count, request.deviation);

    let (items, separator) = match request.unit {
        Unit::Words => {
            let words = gen.words_vec(count, request.fixed_start);
            (words.into_iter().map(String::from).collect::<Vec<_>>(), " ")
        }
        Unit::Sentences => (
            gen.sentences_vec(count, request.word_length(), request.fixed_start),
            " ",
        ),
        Unit::Paragraphs => (
            gen.paragraphs_vec(
                count,
                request.sentence_length(),
                request.word_length(),
                request.fixed_start,
            ),
            "\n\n",
        ),
    };

    let text = items.join(separator);
    tracing::debug!("Generated {} {} ({} bytes)", items.len(), request.unit, text.len());

    Ok(GeneratedText {
        seed,
        unit: request.unit,
        items,
        text,
    })
}

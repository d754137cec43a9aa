//! Word, sentence and paragraph synthesis.
//!
//! Lengths are Gaussian draws rounded half away from zero. A draw that
//! rounds to zero or below yields an empty unit rather than an error.

use crate::generator::TextGenerator;
use crate::vocab::{SENTENCE_START, VOCAB};

/// Mean and standard deviation of a Gaussian length draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Length {
    pub mean: f64,
    pub deviation: f64,
}

impl Length {
    /// Default words per sentence
    pub const SENTENCE_WORDS: Length = Length::new(24.46, 5.08);

    /// Default sentences per paragraph
    pub const PARAGRAPH_SENTENCES: Length = Length::new(5.8, 1.93);

    pub const fn new(mean: f64, deviation: f64) -> Self {
        Self { mean, deviation }
    }

    /// A length with zero deviation.
    pub const fn exact(mean: f64) -> Self {
        Self::new(mean, 0.0)
    }
}

impl From<f64> for Length {
    fn from(mean: f64) -> Self {
        Length::exact(mean)
    }
}

impl From<(f64, f64)> for Length {
    fn from((mean, deviation): (f64, f64)) -> Self {
        Length::new(mean, deviation)
    }
}

impl TextGenerator {
    /// Space-joined [`words_vec`](Self::words_vec).
    pub fn words(&mut self, count: impl Into<Length>, fixed_start: bool) -> String {
        self.words_vec(count, fixed_start).join(" ")
    }

    /// Draw a word count and fill it with shuffled vocabulary batches.
    ///
    /// No batch starts with the word that ended the previous batch, even
    /// across calls. With `fixed_start`, the first batch opens with
    /// [`SENTENCE_START`] in order.
    pub fn words_vec(&mut self, count: impl Into<Length>, fixed_start: bool) -> Vec<&'static str> {
        let count = self.draw_count(count.into());
        let mut fixed_start = fixed_start;
        let mut result = Vec::new();

        while result.len() < count {
            let batch = loop {
                let batch = self.shuffled_vocab(!fixed_start);
                if batch.first() != Some(&self.last_word) {
                    break batch;
                }
            };

            if fixed_start {
                result.extend_from_slice(&SENTENCE_START);
            }
            if let Some(&last) = batch.last() {
                self.last_word = last;
            }
            result.extend(batch);
            fixed_start = false;
        }

        result.truncate(count);
        result
    }

    /// Space-joined [`sentences_vec`](Self::sentences_vec).
    pub fn sentences(
        &mut self,
        count: impl Into<Length>,
        words: Length,
        fixed_start: bool,
    ) -> String {
        self.sentences_vec(count, words, fixed_start).join(" ")
    }

    /// Draw a sentence count, then a word list per sentence and punctuate
    /// it. Only the first sentence may get the fixed start.
    pub fn sentences_vec(
        &mut self,
        count: impl Into<Length>,
        words: Length,
        fixed_start: bool,
    ) -> Vec<String> {
        let count = self.draw_count(count.into());
        let mut fixed_start = fixed_start;
        let mut result = Vec::new();

        for _ in 0..count {
            let sentence = self.words_vec(words, fixed_start);
            result.push(self.punctuate(&sentence));
            fixed_start = false;
        }

        result
    }

    /// Paragraphs joined by a blank line.
    pub fn paragraphs(
        &mut self,
        count: impl Into<Length>,
        sentences: Length,
        words: Length,
        fixed_start: bool,
    ) -> String {
        self.paragraphs_vec(count, sentences, words, fixed_start)
            .join("\n\n")
    }

    /// Draw a paragraph count; each paragraph is a space-joined
    /// [`sentences`](Self::sentences) call. Only the first paragraph may
    /// get the fixed start.
    pub fn paragraphs_vec(
        &mut self,
        count: impl Into<Length>,
        sentences: Length,
        words: Length,
        fixed_start: bool,
    ) -> Vec<String> {
        let count = self.draw_count(count.into());
        let mut fixed_start = fixed_start;
        let mut result = Vec::new();

        for _ in 0..count {
            result.push(self.sentences(sentences, words, fixed_start));
            fixed_start = false;
        }

        result
    }

    /// Gaussian draw rounded to a non-negative unit count.
    fn draw_count(&mut self, length: Length) -> usize {
        let n = self.gauss(length.mean, length.deviation).round();
        if n > 0.0 {
            n as usize
        } else {
            0
        }
    }

    /// Shuffled copy of the vocabulary, optionally including the opening words.
    fn shuffled_vocab(&mut self, with_sentence_start: bool) -> Vec<&'static str> {
        let mut vocab: Vec<&'static str> = if with_sentence_start {
            SENTENCE_START.iter().chain(VOCAB.iter()).copied().collect()
        } else {
            VOCAB.to_vec()
        };
        self.shuffle(&mut vocab);
        vocab
    }

    /// Join words into a sentence: commas for sentences over four words,
    /// a closing period, and an uppercase first letter.
    fn punctuate(&mut self, words: &[&str]) -> String {
        let n = words.len();
        let mut commas = vec![false; n];

        if n > 4 {
            let mean = (n as f64).ln() / 6f64.ln();
            let count = self.gauss(mean, mean / 6.0).round();

            if count >= 1.0 {
                for i in 1..=count as usize {
                    let idx = ((i * n) as f64 / (count + 1.0)).round();
                    if idx > 0.0 && idx < (n - 1) as f64 {
                        commas[idx as usize] = true;
                    }
                }
            }
        }

        let mut text = String::with_capacity(words.iter().map(|w| w.len() + 2).sum::<usize>() + 1);
        for (i, word) in words.iter().enumerate() {
            if i > 0 {
                text.push(' ');
            }
            text.push_str(word);
            if commas[i] {
                text.push(',');
            }
        }
        text.push('.');

        if let Some(first) = text.get_mut(0..1) {
            first.make_ascii_uppercase();
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: u32 = 47513;

    fn generator() -> TextGenerator {
        TextGenerator::new(Some(SEED))
    }

    #[test]
    fn test_words_fixture() {
        let mut gen = generator();
        assert_eq!(
            gen.words(10.0, false),
            "donec ligula purus hendrerit dis dui conubia orci ac dapibus"
        );
        // The rest of the batch was consumed; its last word is remembered
        assert_eq!(gen.last_word, "magnis");
    }

    #[test]
    fn test_fixed_start_sentences_fixture() {
        let mut gen = generator();
        let sentences = gen.sentences_vec(2.0, Length::SENTENCE_WORDS, true);
        assert_eq!(
            sentences,
            vec![
                "Lorem ipsum dolor sit amet consectetur adipiscing elit egestas volutpat, viverra quisque class nascetur duis curabitur senectus dapibus ut cursus, hac feugiat parturient quam sociosqu iaculis quis primis.",
                "Mattis tempus parturient aliquet curae tortor nulla habitant ipsum ut euismod proin, posuere class quis dapibus platea vivamus dignissim cubilia torquent finibus egestas, semper lobortis congue non ullamcorper dis porta nam himenaeos lacinia.",
            ]
        );
    }

    #[test]
    fn test_word_count_exact() {
        let mut gen = generator();
        for n in [0usize, 1, 4, 5, 8, 24, 177, 178, 186, 187, 400, 1000] {
            assert_eq!(gen.words_vec(n as f64, false).len(), n);
            assert_eq!(gen.words_vec(n as f64, true).len(), n);
        }
        // Rounds half away from zero
        assert_eq!(gen.words_vec(2.5, false).len(), 3);
        assert_eq!(gen.words_vec(2.4, false).len(), 2);
    }

    #[test]
    fn test_degenerate_counts_are_empty() {
        let mut gen = generator();
        assert!(gen.words_vec(-5.0, false).is_empty());
        assert!(gen.words_vec(0.4, false).is_empty());
        assert!(gen.sentences_vec(-1.0, Length::SENTENCE_WORDS, false).is_empty());
        assert!(gen
            .paragraphs_vec(0.0, Length::PARAGRAPH_SENTENCES, Length::SENTENCE_WORDS, true)
            .is_empty());
        assert_eq!(gen.words(0.0, false), "");
    }

    #[test]
    fn test_fixed_start_prefix() {
        let mut gen = generator();
        let words = gen.words_vec(20.0, true);
        assert_eq!(&words[..8], &SENTENCE_START[..]);
        // The shuffled part of a fixed-start batch never repeats the opening
        assert!(words[8..].iter().all(|w| !SENTENCE_START.contains(w)));

        let short = gen.words_vec(3.0, true);
        assert_eq!(short, vec!["lorem", "ipsum", "dolor"]);
    }

    #[test]
    fn test_no_repeat_across_batches_and_calls() {
        let mut gen = TextGenerator::new(Some(7));
        let mut previous_last: Option<&str> = None;
        for round in 0..50 {
            let words = gen.words_vec(500.0, round % 5 == 0);
            for pair in words.windows(2) {
                assert_ne!(pair[0], pair[1], "immediate repeat in round {}", round);
            }
            if let (Some(prev), false) = (previous_last, round % 5 == 0) {
                assert_ne!(Some(&prev), words.first(), "repeat across calls");
            }
            previous_last = Some(gen.last_word);
        }
    }

    #[test]
    fn test_punctuation_rules() {
        let mut gen = TextGenerator::new(Some(11));
        for sentence in gen.sentences_vec(400.0, Length::new(8.0, 6.0), false) {
            if sentence == "." {
                continue;
            }
            assert!(sentence.ends_with('.'));
            assert!(!sentence.ends_with(".."));
            assert_eq!(sentence.matches('.').count(), 1);
            assert!(sentence.as_bytes()[0].is_ascii_uppercase(), "{}", sentence);
            assert!(!sentence.contains(",."), "comma on last word: {}", sentence);

            let words: Vec<&str> = sentence.split(' ').collect();
            assert!(!words[0].ends_with(','), "comma on first word: {}", sentence);
            if words.len() <= 4 {
                assert!(!sentence.contains(','), "{}", sentence);
            }
        }
    }

    #[test]
    fn test_punctuate_short_sentence() {
        let mut gen = generator();
        assert_eq!(gen.punctuate(&["a", "b", "c", "d"]), "A b c d.");
        assert_eq!(gen.punctuate(&[]), ".");
    }

    #[test]
    fn test_paragraph_join() {
        let mut gen = generator();
        let text = gen.paragraphs(3.0, Length::exact(2.0), Length::exact(6.0), false);
        let paragraphs: Vec<&str> = text.split("\n\n").collect();
        assert_eq!(paragraphs.len(), 3);
        for paragraph in paragraphs {
            assert_eq!(paragraph.matches(". ").count(), 1, "{}", paragraph);
            assert!(paragraph.ends_with('.'));
        }
    }

    #[test]
    fn test_length_conversions() {
        assert_eq!(Length::from(3.0), Length::new(3.0, 0.0));
        assert_eq!(Length::from((3.0, 1.5)), Length::new(3.0, 1.5));
        assert_eq!(Length::SENTENCE_WORDS, Length::new(24.46, 5.08));
        assert_eq!(Length::PARAGRAPH_SENTENCES, Length::new(5.8, 1.93));
    }
}

//! Frequency-ranked dictionary segmenter.
//!
//! The model is a word list, most frequent word first. Each word costs
//! `ln((rank + 1) * ln(N))`; a split minimises the summed cost over
//! substrings no longer than the longest word. Unknown substrings cost
//! infinity, so they only appear when nothing else covers the input.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::LazyLock;

use flate2::read::GzDecoder;
use regex::Regex;

use crate::error::NormalizeError;
use crate::segment::Segmenter;

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9']+").expect("Invalid word separator regex"));

#[derive(Debug, Clone)]
pub struct DictionarySegmenter {
    costs: HashMap<String, f64>,
    max_word_len: usize,
}

impl DictionarySegmenter {
    /// Builds a segmenter from words ordered by descending frequency.
    ///
    /// Returns `None` for an empty list.
    pub fn from_ranked_words<I, S>(words: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words
            .into_iter()
            .map(Into::into)
            .filter(|w| !w.is_empty())
            .collect();
        if words.is_empty() {
            return None;
        }
        let log_len = (words.len().max(2) as f64).ln();
        let max_word_len = words.iter().map(String::len).max().unwrap_or(0);
        let mut costs = HashMap::with_capacity(words.len());
        for (rank, word) in words.into_iter().enumerate() {
            // First occurrence keeps the better rank.
            costs
                .entry(word)
                .or_insert_with(|| (((rank + 1) as f64) * log_len).ln());
        }
        Some(Self {
            costs,
            max_word_len,
        })
    }

    /// Loads a model file, one word per line. `.gz` files are decompressed.
    pub fn load(path: &Path) -> Result<Self, NormalizeError> {
        let read_err = |source| NormalizeError::ModelRead {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(read_err)?;
        let reader: Box<dyn BufRead> = if path.extension().is_some_and(|ext| ext == "gz") {
            Box::new(BufReader::new(GzDecoder::new(file)))
        } else {
            Box::new(BufReader::new(file))
        };
        let mut words = Vec::new();
        for line in reader.lines() {
            let line = line.map_err(read_err)?;
            let word = line.trim();
            if !word.is_empty() {
                words.push(word.to_lowercase());
            }
        }
        let segmenter = Self::from_ranked_words(words).ok_or_else(|| NormalizeError::EmptyModel {
            path: path.to_path_buf(),
        })?;
        tracing::info!(
            path = %path.display(),
            words = segmenter.costs.len(),
            "loaded segmentation model"
        );
        Ok(segmenter)
    }

    pub fn len(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    /// Splits `text` into words. Runs of characters outside
    /// `[A-Za-z0-9']` separate chunks and are dropped.
    pub fn split(&self, text: &str) -> Vec<String> {
        NON_WORD
            .split(text)
            .flat_map(|chunk| self.split_chunk(chunk))
            .collect()
    }

    fn word_cost(&self, word: &str) -> f64 {
        self.costs
            .get(&word.to_ascii_lowercase())
            .copied()
            .unwrap_or(f64::INFINITY)
    }

    /// Best `(cost, length)` for a word ending at byte `end`.
    fn best_match(&self, chunk: &str, cost: &[f64], end: usize) -> (f64, usize) {
        let start = end.saturating_sub(self.max_word_len);
        let mut best = (f64::INFINITY, usize::MAX);
        for len in 1..=(end - start) {
            let candidate = (cost[end - len] + self.word_cost(&chunk[end - len..end]), len);
            if candidate.0 < best.0 || (candidate.0 == best.0 && candidate.1 < best.1) {
                best = candidate;
            }
        }
        best
    }

    fn split_chunk(&self, chunk: &str) -> Vec<String> {
        // Chunks only hold ASCII, so byte offsets are char boundaries.
        let mut cost = Vec::with_capacity(chunk.len() + 1);
        let mut lens = Vec::with_capacity(chunk.len() + 1);
        cost.push(0.0);
        lens.push(0);
        for end in 1..=chunk.len() {
            let (c, len) = self.best_match(chunk, &cost, end);
            cost.push(c);
            lens.push(len);
        }

        let bytes = chunk.as_bytes();
        let mut out: Vec<String> = Vec::new();
        let mut end = chunk.len();
        while end > 0 {
            let len = lens[end];
            let token = &chunk[end - len..end];
            let mut attached = false;
            if token != "'"
                && let Some(last) = out.last_mut()
            {
                let digits_continue = bytes[end - 1].is_ascii_digit()
                    && last.as_bytes().first().is_some_and(u8::is_ascii_digit);
                if last.as_str() == "'s" || digits_continue {
                    last.insert_str(0, token);
                    attached = true;
                }
            }
            if !attached {
                out.push(token.to_string());
            }
            end -= len;
        }
        out.reverse();
        out
    }
}

impl Segmenter for DictionarySegmenter {
    fn segment(&self, word: &str) -> String {
        self.split(word).join("_")
    }
}

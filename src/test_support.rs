//! Fake model providers for tests: deterministic segmentation and
//! translation with atomic counters so tests can assert how often the
//! real providers would have been hit.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::anyhow;
use async_trait::async_trait;

use crate::language::{Language, LanguagePair};
use crate::nlp::interface::{LanguageModel, LanguageModelProvider, Token};
use crate::translation::interface::{TranslationModel, TranslationModelProvider};

/// Splits on sentence-final periods and tags whitespace-separated words.
pub struct FakeLanguageModel {
    canned_sentences: Option<Vec<String>>,
}

#[async_trait]
impl LanguageModel for FakeLanguageModel {
    async fn segment(&self, text: &str) -> Result<Vec<String>, anyhow::Error> {
        if let Some(sentences) = &self.canned_sentences {
            return Ok(sentences.clone());
        }
        Ok(text
            .split_inclusive('.')
            .filter(|s| !s.trim().is_empty())
            .map(|s| s.to_string())
            .collect())
    }

    async fn tag(&self, sentence: &str) -> Result<Vec<Token>, anyhow::Error> {
        Ok(sentence
            .split_whitespace()
            .map(|word| Token {
                text: word.to_string(),
                pos: "X".to_string(),
            })
            .collect())
    }
}

pub struct FakeLanguageModelProvider {
    pub loads: AtomicUsize,
    canned_sentences: Option<Vec<String>>,
}

impl FakeLanguageModelProvider {
    pub fn new() -> Self {
        Self {
            loads: AtomicUsize::new(0),
            canned_sentences: None,
        }
    }

    /// Provider whose model returns exactly these sentences for any input.
    pub fn segmenting(sentences: Vec<String>) -> Self {
        Self {
            loads: AtomicUsize::new(0),
            canned_sentences: Some(sentences),
        }
    }
}

#[async_trait]
impl LanguageModelProvider for FakeLanguageModelProvider {
    async fn load(&self, _language: Language) -> Result<Arc<dyn LanguageModel>, anyhow::Error> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        Ok(Arc::new(FakeLanguageModel {
            canned_sentences: self.canned_sentences.clone(),
        }))
    }
}

/// Echoes its input with a marker suffix; optionally fails on one sentence.
pub struct FakeTranslationModel {
    pub calls: AtomicUsize,
    pub last_max_length: AtomicUsize,
    fail_on: Option<String>,
}

#[async_trait]
impl TranslationModel for FakeTranslationModel {
    async fn translate(&self, text: &str, max_length: usize) -> Result<String, anyhow::Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.last_max_length.store(max_length, Ordering::SeqCst);
        if self.fail_on.as_deref() == Some(text) {
            return Err(anyhow!("inference error on '{}'", text));
        }
        Ok(format!("{} (translated)", text))
    }
}

pub struct FakeTranslationModelProvider {
    pub loads: AtomicUsize,
    pub model: Arc<FakeTranslationModel>,
    fail_loads: bool,
}

impl FakeTranslationModelProvider {
    pub fn new() -> Self {
        Self::with_model(None, false)
    }

    /// Provider that refuses to load any pair.
    pub fn failing() -> Self {
        Self::with_model(None, true)
    }

    /// Provider whose model errors when asked to translate `sentence`.
    pub fn failing_on(sentence: &str) -> Self {
        Self::with_model(Some(sentence.to_string()), false)
    }

    fn with_model(fail_on: Option<String>, fail_loads: bool) -> Self {
        Self {
            loads: AtomicUsize::new(0),
            model: Arc::new(FakeTranslationModel {
                calls: AtomicUsize::new(0),
                last_max_length: AtomicUsize::new(0),
                fail_on,
            }),
            fail_loads,
        }
    }
}

#[async_trait]
impl TranslationModelProvider for FakeTranslationModelProvider {
    async fn load(&self, pair: LanguagePair) -> Result<Arc<dyn TranslationModel>, anyhow::Error> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        if self.fail_loads {
            return Err(anyhow!("no translation model for pair '{}'", pair));
        }
        Ok(self.model.clone())
    }
}

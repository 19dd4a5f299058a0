// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Result, anyhow};
use inspire_app::{CategoryRecord, Generator, QUOTES_PER_BATCH};
use serde_json::json;
use std::collections::VecDeque;

pub const SAMPLE_RESPONSE: &str = "a\nb\n\nc  ";

const QUOTE_OPENERS: [&str; 10] = [
    "Small steps",
    "Every setback",
    "Bold ideas",
    "Quiet focus",
    "Shared effort",
    "Curiosity",
    "Today's practice",
    "A clear goal",
    "Honest feedback",
    "Consistent work",
];

const QUOTE_ENDINGS: [&str; 10] = [
    "build lasting momentum.",
    "is a lesson in disguise.",
    "need brave hands.",
    "turns noise into progress.",
    "lifts every outcome.",
    "opens locked doors.",
    "becomes tomorrow's instinct.",
    "makes the path visible.",
    "sharpens every edge.",
    "outlasts raw talent.",
];

#[derive(Debug, Clone, PartialEq, Eq)]
enum Reply {
    Text(String),
    Failure(String),
}

/// Generator that replays queued replies in order and records every prompt.
#[derive(Debug, Clone, Default)]
pub struct ScriptedGenerator {
    replies: VecDeque<Reply>,
    prompts: Vec<String>,
}

impl ScriptedGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replying(text: impl Into<String>) -> Self {
        Self::new().then_text(text)
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self::new().then_failure(message)
    }

    pub fn then_text(mut self, text: impl Into<String>) -> Self {
        self.replies.push_back(Reply::Text(text.into()));
        self
    }

    pub fn then_failure(mut self, message: impl Into<String>) -> Self {
        self.replies.push_back(Reply::Failure(message.into()));
        self
    }

    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn remaining(&self) -> usize {
        self.replies.len()
    }
}

impl Generator for ScriptedGenerator {
    fn generate(&mut self, prompt: &str) -> Result<String> {
        self.prompts.push(prompt.to_owned());
        match self.replies.pop_front() {
            Some(Reply::Text(text)) => Ok(text),
            Some(Reply::Failure(message)) => Err(anyhow!(message)),
            None => Err(anyhow!("scripted generator has no reply queued")),
        }
    }
}

/// Generator that always answers with a deterministic batch for the prompt.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedBatchGenerator {
    pub calls: usize,
}

impl Generator for FixedBatchGenerator {
    fn generate(&mut self, _prompt: &str) -> Result<String> {
        self.calls += 1;
        Ok(quote_batch(self.calls))
    }
}

/// Ten distinct quote lines; `seed` rotates the pairing so batches differ.
pub fn quote_batch(seed: usize) -> String {
    (0..QUOTES_PER_BATCH)
        .map(|index| {
            let opener = QUOTE_OPENERS[index % QUOTE_OPENERS.len()];
            let ending = QUOTE_ENDINGS[(index + seed) % QUOTE_ENDINGS.len()];
            format!("{opener} {ending}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn gemini_text_body(text: &str) -> String {
    json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP"
        }]
    })
    .to_string()
}

pub fn category(name: &str) -> CategoryRecord {
    inspire_app::find_category(name).unwrap_or_else(|| panic!("unknown test category {name:?}"))
}

// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Result, anyhow};
use inspire_app::{CategoryRecord, Generator, QuoteRecord, QuoteSession, find_category, grouped};
use inspire_llm::Client;
use std::io::Write;

/// Adapts the Gemini client to the session's generation seam.
pub struct LlmGenerator {
    client: Client,
}

impl LlmGenerator {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl Generator for LlmGenerator {
    fn generate(&mut self, prompt: &str) -> Result<String> {
        self.client.generate_content(prompt)
    }
}

pub fn resolve_category(name: &str) -> Result<CategoryRecord> {
    find_category(name).ok_or_else(|| {
        anyhow!("unknown category {name:?}; run `inspire --list-categories` to see the choices")
    })
}

/// Runs select + request once and returns the batch.
pub fn fetch_quotes<G: Generator>(
    session: &mut QuoteSession<G>,
    category: CategoryRecord,
) -> Result<Vec<QuoteRecord>> {
    session.select_category(category)?;
    session.request_quotes()?;
    Ok(session.state().quotes.clone())
}

pub fn write_quotes(out: &mut impl Write, quotes: &[QuoteRecord]) -> Result<()> {
    for quote in quotes {
        writeln!(out, "{}", quote.text)?;
    }
    Ok(())
}

pub fn write_categories(out: &mut impl Write) -> Result<()> {
    for section in grouped() {
        writeln!(out, "{}", section.group.as_str())?;
        for category in section.categories {
            writeln!(out, "  {:<26} {}", category.name, category.description)?;
        }
    }
    Ok(())
}

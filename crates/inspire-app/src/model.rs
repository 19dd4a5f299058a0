// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};

use crate::CategoryRecord;

pub const QUOTES_PER_BATCH: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRecord {
    pub text: String,
    pub category: String,
}

impl QuoteRecord {
    pub fn new(text: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: category.into(),
        }
    }
}

/// One quote per non-empty trimmed line, in response order.
pub fn parse_quotes(response: &str, category: &CategoryRecord) -> Vec<QuoteRecord> {
    response
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| QuoteRecord::new(line, category.name))
        .collect()
}

pub fn build_quote_prompt(category: &CategoryRecord) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Generate {QUOTES_PER_BATCH} unique, inspiring quotes related to {}.\n",
        category.name
    ));
    out.push_str(&format!(
        "The quotes should be relevant to {}.\n",
        category.description
    ));
    out.push_str("Format each quote on a new line.\n");
    out.push_str("Make the quotes concise, impactful, and memorable.\n");
    out.push_str("Do not include attribution or authors.");
    out
}

// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::{CategoryRecord, QuoteRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    SelectingCategory,
    ShowingQuotes,
}

impl ViewMode {
    pub const fn label(self) -> &'static str {
        match self {
            Self::SelectingCategory => "select",
            Self::ShowingQuotes => "quotes",
        }
    }
}

/// Which user intent started a generation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Initial,
    Refresh,
}

impl Trigger {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Initial => "initial",
            Self::Refresh => "refresh",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub selected_category: Option<CategoryRecord>,
    pub quotes: Vec<QuoteRecord>,
    pub view_mode: ViewMode,
    pub is_loading: bool,
    pub is_refreshing: bool,
    pub dialog_open: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            selected_category: None,
            quotes: Vec::new(),
            view_mode: ViewMode::SelectingCategory,
            is_loading: false,
            is_refreshing: false,
            dialog_open: false,
        }
    }
}

impl SessionState {
    pub const fn is_busy(&self) -> bool {
        self.is_loading || self.is_refreshing
    }

    pub(crate) fn set_busy(&mut self, trigger: Trigger, busy: bool) {
        match trigger {
            Trigger::Initial => self.is_loading = busy,
            Trigger::Refresh => self.is_refreshing = busy,
        }
    }
}

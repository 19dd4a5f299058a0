// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use tracing::{debug, info, warn};

use crate::{
    CategoryRecord, NO_CATEGORY_MESSAGE, SessionError, SessionState, Trigger, ViewMode,
    build_quote_prompt, parse_quotes,
};

/// The external text-generation capability.
pub trait Generator {
    fn generate(&mut self, prompt: &str) -> anyhow::Result<String>;
}

impl<G: Generator + ?Sized> Generator for Box<G> {
    fn generate(&mut self, prompt: &str) -> anyhow::Result<String> {
        (**self).generate(prompt)
    }
}

impl<G: Generator + ?Sized> Generator for &mut G {
    fn generate(&mut self, prompt: &str) -> anyhow::Result<String> {
        (**self).generate(prompt)
    }
}

/// An accepted generation call that has not been completed yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    trigger: Trigger,
    category: CategoryRecord,
    prompt: String,
}

impl GenerationRequest {
    pub const fn trigger(&self) -> Trigger {
        self.trigger
    }

    pub const fn category(&self) -> &CategoryRecord {
        &self.category
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }
}

pub struct QuoteSession<G> {
    state: SessionState,
    generator: G,
}

impl<G: Generator> QuoteSession<G> {
    pub fn new(generator: G) -> Self {
        Self {
            state: SessionState::default(),
            generator,
        }
    }

    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn generator_mut(&mut self) -> &mut G {
        &mut self.generator
    }

    pub fn into_generator(self) -> G {
        self.generator
    }

    pub fn select_category(&mut self, category: CategoryRecord) -> Result<(), SessionError> {
        if self.state.view_mode != ViewMode::SelectingCategory {
            return Err(SessionError::validation(
                "categories can only be chosen from the selection view",
            ));
        }
        debug!(category = category.name, "category selected");
        self.state.selected_category = Some(category);
        Ok(())
    }

    pub fn request_quotes(&mut self) -> Result<usize, SessionError> {
        let request = self.begin(Trigger::Initial)?;
        let outcome = self.generate(&request);
        self.complete(request, outcome)
    }

    pub fn refresh_quotes(&mut self) -> Result<usize, SessionError> {
        let request = self.begin(Trigger::Refresh)?;
        let outcome = self.generate(&request);
        self.complete(request, outcome)
    }

    pub fn reset_to_selection(&mut self) -> Result<(), SessionError> {
        if self.state.view_mode != ViewMode::ShowingQuotes {
            return Err(SessionError::validation(
                "already choosing a category; nothing to reset",
            ));
        }
        self.state.view_mode = ViewMode::SelectingCategory;
        self.state.quotes.clear();
        Ok(())
    }

    pub fn toggle_info_dialog(&mut self, open: bool) {
        self.state.dialog_open = open;
    }

    /// Validates the trigger against the current view and marks the session busy.
    pub fn begin(&mut self, trigger: Trigger) -> Result<GenerationRequest, SessionError> {
        if trigger == Trigger::Refresh && self.state.view_mode != ViewMode::ShowingQuotes {
            return Err(SessionError::validation(
                "refresh is only available while quotes are shown",
            ));
        }
        let category = self
            .state
            .selected_category
            .ok_or_else(|| SessionError::validation(NO_CATEGORY_MESSAGE))?;

        self.state.set_busy(trigger, true);
        info!(
            category = category.name,
            trigger = trigger.as_str(),
            "requesting quotes"
        );
        Ok(GenerationRequest {
            trigger,
            category,
            prompt: build_quote_prompt(&category),
        })
    }

    pub fn generate(&mut self, request: &GenerationRequest) -> anyhow::Result<String> {
        self.generator.generate(request.prompt())
    }

    /// Applies the outcome of a call started with [`QuoteSession::begin`].
    pub fn complete(
        &mut self,
        request: GenerationRequest,
        outcome: anyhow::Result<String>,
    ) -> Result<usize, SessionError> {
        self.state.set_busy(request.trigger, false);

        let text = match outcome {
            Ok(text) => text,
            Err(error) => {
                warn!(
                    category = request.category.name,
                    trigger = request.trigger.as_str(),
                    error = %format!("{error:#}"),
                    "quote generation failed"
                );
                return Err(SessionError::generation(&error));
            }
        };

        if request.trigger == Trigger::Refresh && self.state.view_mode != ViewMode::ShowingQuotes
        {
            return Err(SessionError::validation(
                "refresh finished after leaving the quote list; result discarded",
            ));
        }

        let quotes = parse_quotes(&text, &request.category);
        let count = quotes.len();
        self.state.quotes = quotes;
        if request.trigger == Trigger::Initial {
            self.state.view_mode = ViewMode::ShowingQuotes;
        }
        info!(
            category = request.category.name,
            trigger = request.trigger.as_str(),
            count,
            "quotes updated"
        );
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::{Generator, QuoteSession};
    use crate::{SessionError, Trigger, ViewMode, find_category};
    use anyhow::anyhow;

    struct Echo;

    impl Generator for Echo {
        fn generate(&mut self, _prompt: &str) -> anyhow::Result<String> {
            Ok("one\ntwo".to_owned())
        }
    }

    struct Down;

    impl Generator for Down {
        fn generate(&mut self, _prompt: &str) -> anyhow::Result<String> {
            Err(anyhow!("service unavailable"))
        }
    }

    #[test]
    fn begin_marks_loading_until_complete() {
        let mut session = QuoteSession::new(Echo);
        session
            .select_category(find_category("Leadership").expect("category exists"))
            .expect("select succeeds");

        let request = session.begin(Trigger::Initial).expect("begin succeeds");
        assert!(session.state().is_loading);
        assert!(!session.state().is_refreshing);
        assert!(request.prompt().contains("Leadership"));

        let outcome = session.generate(&request);
        let count = session.complete(request, outcome).expect("complete succeeds");
        assert_eq!(count, 2);
        assert!(!session.state().is_loading);
        assert_eq!(session.state().view_mode, ViewMode::ShowingQuotes);
    }

    #[test]
    fn refresh_before_results_is_rejected() {
        let mut session = QuoteSession::new(Echo);
        session
            .select_category(find_category("Leadership").expect("category exists"))
            .expect("select succeeds");

        let error = session.refresh_quotes().expect_err("refresh should fail");
        assert!(error.is_validation());
        assert!(!session.state().is_refreshing);
        assert_eq!(session.state().view_mode, ViewMode::SelectingCategory);
    }

    #[test]
    fn failure_clears_busy_flag() {
        let mut session = QuoteSession::new(Down);
        session
            .select_category(find_category("Leadership").expect("category exists"))
            .expect("select succeeds");

        let error = session.request_quotes().expect_err("request should fail");
        assert_eq!(
            error,
            SessionError::Generation("service unavailable".to_owned())
        );
        assert!(!session.state().is_loading);
    }

    #[test]
    fn select_is_rejected_while_showing_quotes() {
        let mut session = QuoteSession::new(Echo);
        let leadership = find_category("Leadership").expect("category exists");
        session.select_category(leadership).expect("select succeeds");
        session.request_quotes().expect("request succeeds");

        let other = find_category("Confidence Boost").expect("category exists");
        let error = session
            .select_category(other)
            .expect_err("select should fail in results view");
        assert!(error.is_validation());
        assert_eq!(session.state().selected_category, Some(leadership));
    }

    #[test]
    fn reset_from_selection_is_rejected() {
        let mut session = QuoteSession::new(Echo);
        let error = session
            .reset_to_selection()
            .expect_err("reset should fail in selection view");
        assert!(error.is_validation());
    }
}

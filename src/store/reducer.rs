// src/store/reducer.rs - Pure session transitions
use chrono::{DateTime, Utc};

use crate::errors::ShortenError;
use crate::events::AppEvent;
use crate::models::{InputEdit, PendingInput, ShortenedRecord};
use crate::utils::{generate, ShortcodeGenerator};
use crate::validations::validate_batch;

use super::{Action, Effect, Outcome, SessionState, ShortenerSettings, Transition};

/// Inputs a transition may read besides the state itself
pub struct Context<'a> {
    pub now: DateTime<Utc>,
    pub generator: &'a dyn ShortcodeGenerator,
    pub settings: &'a ShortenerSettings,
}

/// Computes the state that follows `action`. `state` itself is never modified.
pub fn reduce(state: &SessionState, action: &Action, ctx: &Context<'_>) -> Transition {
    match action {
        Action::AddInput => add_input(state, ctx.settings),
        Action::EditInput { index, edit } => edit_input(state, *index, edit),
        Action::Submit => submit(state, ctx),
        Action::Redirect { shortcode } => redirect(state, shortcode, ctx.now),
    }
}

fn add_input(state: &SessionState, settings: &ShortenerSettings) -> Transition {
    if state.pending_inputs.len() >= settings.max_pending_inputs {
        return Transition::ignored(state);
    }

    let mut next = state.clone();
    next.pending_inputs
        .push(PendingInput::blank(settings.default_validity_minutes));

    Transition {
        state: next,
        effects: Vec::new(),
        outcome: Outcome::Applied,
    }
}

fn edit_input(state: &SessionState, index: usize, edit: &InputEdit) -> Transition {
    let Some(current) = state.pending_inputs.get(index) else {
        return Transition::ignored(state);
    };

    let mut next = state.clone();
    next.pending_inputs[index] = current.with_edit(edit);

    Transition {
        state: next,
        effects: Vec::new(),
        outcome: Outcome::Applied,
    }
}

fn submit(state: &SessionState, ctx: &Context<'_>) -> Transition {
    let mut next = state.clone();
    next.error = None;

    if let Err(err) = validate_batch(&state.pending_inputs) {
        let event = match &err {
            ShortenError::InvalidUrl(url) => AppEvent::InvalidUrl { url: url.clone() },
            _ => AppEvent::InvalidValidity,
        };
        next.error = Some(err.to_string());
        return Transition {
            state: next,
            effects: vec![Effect::Log(event)],
            outcome: Outcome::Rejected(err),
        };
    }

    let mut effects = Vec::with_capacity(state.pending_inputs.len());
    for input in &state.pending_inputs {
        let shortcode = generate(
            &input.custom_code,
            ctx.generator,
            ctx.settings.shortcode_length,
        );
        effects.push(Effect::Log(AppEvent::Shortened {
            long_url: input.long_url.clone(),
            shortcode: shortcode.clone(),
            validity_minutes: input.validity_minutes,
        }));
        next.records.push(ShortenedRecord::new(
            input.long_url.clone(),
            shortcode,
            ctx.now,
            input.validity_minutes,
        ));
    }
    next.pending_inputs = vec![PendingInput::blank(ctx.settings.default_validity_minutes)];

    Transition {
        state: next,
        effects,
        outcome: Outcome::Applied,
    }
}

fn redirect(state: &SessionState, shortcode: &str, now: DateTime<Utc>) -> Transition {
    let Some((index, record)) = state.find_record(shortcode) else {
        return Transition::ignored(state);
    };

    let mut next = state.clone();

    if !record.is_live_at(now) {
        next.error = Some(ShortenError::Expired.to_string());
        return Transition {
            state: next,
            effects: vec![Effect::Log(AppEvent::ExpiredAccess {
                shortcode: shortcode.to_string(),
            })],
            outcome: Outcome::Rejected(ShortenError::Expired),
        };
    }

    next.records[index] = record.with_click(now);
    let target = record.long_url().to_string();

    Transition {
        state: next,
        effects: vec![
            Effect::Log(AppEvent::Accessed {
                shortcode: shortcode.to_string(),
                long_url: target.clone(),
                access_time: now,
            }),
            Effect::Open(target.clone()),
        ],
        outcome: Outcome::Opened(target),
    }
}

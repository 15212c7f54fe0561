// src/store/session.rs - Session container that owns state and runs effects
use log::debug;

use crate::clock::Clock;
use crate::events::{AppEvent, EventSink};
use crate::navigation::Navigator;
use crate::utils::ShortcodeGenerator;

use super::reducer::{self, Context};
use super::{Action, Effect, Outcome, SessionState, ShortenerSettings};

/// Holds the current [`SessionState`] and swaps it for the next one on every action
pub struct Session {
    state: SessionState,
    settings: ShortenerSettings,
    clock: Box<dyn Clock>,
    generator: Box<dyn ShortcodeGenerator>,
    events: Box<dyn EventSink>,
    navigator: Box<dyn Navigator>,
    closed: bool,
}

impl Session {
    /// Starts a session with a single blank pending input
    pub fn open(
        settings: ShortenerSettings,
        clock: Box<dyn Clock>,
        generator: Box<dyn ShortcodeGenerator>,
        events: Box<dyn EventSink>,
        navigator: Box<dyn Navigator>,
    ) -> Self {
        events.record(&AppEvent::Started);
        Self {
            state: SessionState::new(&settings),
            settings,
            clock,
            generator,
            events,
            navigator,
            closed: false,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn settings(&self) -> &ShortenerSettings {
        &self.settings
    }

    /// Applies one action and runs the effects it produced
    pub fn dispatch(&mut self, action: Action) -> Outcome {
        let ctx = Context {
            now: self.clock.now(),
            generator: self.generator.as_ref(),
            settings: &self.settings,
        };
        let transition = reducer::reduce(&self.state, &action, &ctx);
        debug!("{:?} -> {:?}", action, transition.outcome);

        self.state = transition.state;
        for effect in &transition.effects {
            match effect {
                Effect::Log(event) => self.events.record(event),
                Effect::Open(url) => self.navigator.open(url),
            }
        }

        transition.outcome
    }

    /// Emits the closing event once; later calls do nothing
    pub fn close(&mut self) {
        if !self.closed {
            self.closed = true;
            self.events.record(&AppEvent::Closed);
        }
    }
}

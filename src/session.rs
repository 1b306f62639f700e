//! Per-session display state and the two user actions.
//!
//! Handlers take the current `SessionState` by value and return the next
//! one. Each handler issues at most one completion call.

use rand::Rng;

use crate::catalog::{NONE_SELECTED, random_pick};
use crate::client::{CompletionBackend, CompletionClient, Status};
use crate::prompt::EMPTY_INPUT_MESSAGE;

/// Values collected from the form for one action
#[derive(Debug, Clone, Default)]
pub(crate) struct FormInput {
    /// Dropdown value; `NONE_SELECTED` when nothing is picked
    pub(crate) selected: String,
    /// Free-text entry
    pub(crate) custom: String,
}

impl FormInput {
    pub(crate) fn new(selected: impl Into<String>, custom: impl Into<String>) -> Self {
        FormInput {
            selected: selected.into(),
            custom: custom.into(),
        }
    }
}

/// Effective project name: free text first, then the dropdown.
///
/// The sentinel and blank values count as empty.
pub(crate) fn resolve_name(form: &FormInput) -> Option<String> {
    let custom = form.custom.trim();
    if !custom.is_empty() {
        return Some(custom.to_string());
    }
    let selected = form.selected.trim();
    if selected.is_empty() || selected == NONE_SELECTED {
        return None;
    }
    Some(selected.to_string())
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum Phase {
    #[default]
    Idle,
    InFlight,
    Completed,
}

/// Latest name and result shown to one user
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct SessionState {
    pub(crate) name: String,
    pub(crate) result: String,
    /// Kind of `result`; `None` before the first completed action
    pub(crate) status: Option<Status>,
    pub(crate) phase: Phase,
}

impl SessionState {
    /// Start a call for `name`; the previous result stays until it completes
    fn start(self, name: String) -> Self {
        SessionState {
            name,
            phase: Phase::InFlight,
            ..self
        }
    }

    /// Whether there is something to render
    pub(crate) fn has_result(&self) -> bool {
        self.phase == Phase::Completed && !self.result.is_empty()
    }
}

fn run<B: CompletionBackend>(
    state: SessionState,
    name: String,
    client: &CompletionClient<B>,
    progress: &mut dyn FnMut(&SessionState),
) -> SessionState {
    let pending = state.start(name);
    progress(&pending);

    let explanation = client.explain(&pending.name);
    SessionState {
        result: explanation.display(),
        status: Some(explanation.status()),
        phase: Phase::Completed,
        ..pending
    }
}

/// "Explain It": resolve the name from the form and explain it.
///
/// Blank input shows the prompt-for-input message without a call and keeps
/// the name of the last explained project.
pub(crate) fn on_explain<B: CompletionBackend>(
    state: SessionState,
    form: &FormInput,
    client: &CompletionClient<B>,
    progress: &mut dyn FnMut(&SessionState),
) -> SessionState {
    match resolve_name(form) {
        Some(name) => run(state, name, client, progress),
        None => SessionState {
            result: EMPTY_INPUT_MESSAGE.to_string(),
            status: Some(Status::Empty),
            phase: Phase::Completed,
            ..state
        },
    }
}

/// "Surprise Me": explain a random preset
pub(crate) fn on_surprise<B: CompletionBackend, R: Rng + ?Sized>(
    state: SessionState,
    rng: &mut R,
    client: &CompletionClient<B>,
    progress: &mut dyn FnMut(&SessionState),
) -> SessionState {
    let name = random_pick(rng).to_string();
    run(state, name, client, progress)
}

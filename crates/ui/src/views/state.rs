use dioxus::prelude::*;

use services::QuizFlowError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    /// The server could not be reached (after the bounded retry).
    Network,
    /// The server answered with something the client could not use.
    BadPayload,
    /// The route carried a category key the client rejects.
    InvalidCategory,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            ViewError::Network => "Couldn't reach the quiz server. Check that it is running.",
            ViewError::BadPayload => "The quiz server sent an unexpected response.",
            ViewError::InvalidCategory => "That quiz category doesn't look right.",
            ViewError::Unknown => "Something went wrong. Please try again.",
        }
    }

    /// Error mapping stays at the UI boundary.
    #[must_use]
    pub fn from_flow(err: &QuizFlowError) -> Self {
        if err.is_network() {
            ViewError::Network
        } else {
            ViewError::BadPayload
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: &Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(*err),
            None => ViewState::Error(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    Unknown,
    DictionaryUnavailable,
    EmptyDictionary,
    UnsupportedVerb,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Unknown => "Something went wrong. Please try again.",
            Self::DictionaryUnavailable => {
                "The verb dictionary could not be loaded. Practice is unavailable."
            }
            Self::EmptyDictionary => "The verb dictionary is empty. Add verbs to start practicing.",
            Self::UnsupportedVerb => "Only infinitives ending in -ar, -er or -ir can be conjugated.",
        }
    }

    /// Whether retrying the same request can succeed.
    #[must_use]
    pub fn is_retryable(self) -> bool {
        matches!(self, Self::Unknown | Self::DictionaryUnavailable)
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
    resource: Resource<Result<T, ViewError>>,
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

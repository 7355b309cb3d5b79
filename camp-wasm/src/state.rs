use leptos::prelude::*;

use crate::models::CampingPost;

#[derive(Debug, Clone)]
pub(crate) struct AppState {
    pub(crate) post: RwSignal<Option<CampingPost>>,
    pub(crate) loading: RwSignal<bool>,
    pub(crate) error: RwSignal<Option<String>>,
    request_seq: RwSignal<u64>,
}

impl AppState {
    pub(crate) fn new() -> Self {
        Self {
            post: RwSignal::new(None),
            // Первая отрисовка всегда показывает "Loading...".
            loading: RwSignal::new(true),
            error: RwSignal::new(None),
            request_seq: RwSignal::new(0),
        }
    }

    pub(crate) fn set_error(&self, message: impl Into<String>) {
        self.error.set(Some(message.into()));
    }

    pub(crate) fn clear_error(&self) {
        self.error.set(None);
    }

    /// Регистрирует новый запрос и возвращает его порядковый номер.
    pub(crate) fn begin_request(&self) -> u64 {
        let seq = self.request_seq.get_untracked() + 1;
        self.request_seq.set(seq);
        seq
    }

    /// Ответ имеет право писать в состояние, только пока его запрос последний.
    pub(crate) fn is_current(&self, seq: u64) -> bool {
        self.request_seq.get_untracked() == seq
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_request_increments_sequence() {
        let state = AppState::new();

        let first = state.begin_request();
        let second = state.begin_request();

        assert!(second > first);
        assert!(state.is_current(second));
        assert!(!state.is_current(first));
    }

    #[test]
    fn new_state_starts_loading_without_error() {
        let state = AppState::new();

        assert!(state.loading.get_untracked());
        assert!(state.error.get_untracked().is_none());
        assert!(state.post.get_untracked().is_none());
    }
}

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::api;
use crate::components::post_detail::PostDetail;
use crate::slug;
use crate::state::AppState;

fn load_camp(state: AppState, slug_value: String) {
    state.loading.set(true);
    state.clear_error();
    let seq = state.begin_request();

    leptos::task::spawn_local(async move {
        let result = api::get_camp(&slug_value).await;

        // Пока ответ летел, пользователь успел запросить другой slug:
        // устаревший ответ не имеет права перезаписать новое состояние.
        if !state.is_current(seq) {
            return;
        }

        match result {
            Ok(post) => state.post.set(post),
            Err(err) => state.set_error(api::view_error_message(&err)),
        }
        state.loading.set(false);
    });
}

#[component]
pub fn App() -> impl IntoView {
    let state = AppState::new();

    let current_slug = RwSignal::new(slug::slug_from_location().unwrap_or_default());
    let slug_input = RwSignal::new(current_slug.get_untracked());

    // Один запрос на каждое значение slug.
    Effect::new({
        let state = state.clone();
        move |_| {
            let slug_value = current_slug.get();
            if slug_value.is_empty() {
                state.loading.set(false);
                return;
            }
            load_camp(state.clone(), slug_value);
        }
    });

    let on_load = move |ev: SubmitEvent| {
        ev.prevent_default();
        let next = slug_input.get().trim().to_string();
        if next.is_empty() || next == current_slug.get_untracked() {
            return;
        }
        current_slug.set(next);
    };

    view! {
        <main class="page">
            <section class="container">
                <h1>"Camping Post Details"</h1>

                <form on:submit=on_load>
                    <input
                        placeholder="slug"
                        prop:value=move || slug_input.get()
                        on:input=move |ev| slug_input.set(event_target_value(&ev))
                    />
                    <button type="submit">"Load"</button>
                </form>

                <PostDetail state=state.clone() />
            </section>
        </main>
    }
}

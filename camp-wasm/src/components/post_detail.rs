use leptos::prelude::*;

use crate::models::{CampingPost, JoinCampingPost, User};
use crate::state::AppState;

fn format_date(raw: &str) -> String {
    // RFC 3339-значение сводится к датной части; всё остальное выводится как есть.
    match raw.split_once('T') {
        Some((date, _)) if !date.is_empty() => date.to_string(),
        _ => raw.to_string(),
    }
}

fn join_or_placeholder(items: &[String], placeholder: &str) -> String {
    if items.is_empty() {
        placeholder.to_string()
    } else {
        items.join(", ")
    }
}

fn first_profile_image(images_profile: &[String]) -> Option<String> {
    images_profile.first().cloned()
}

#[component]
pub(crate) fn PostDetail(state: AppState) -> impl IntoView {
    move || {
        if state.loading.get() {
            return view! { <div class="status-banner">"Loading..."</div> }.into_any();
        }

        if let Some(message) = state.error.get() {
            return view! {
                <div class="status-banner error">"Error: " {message}</div>
            }
            .into_any();
        }

        let Some(post) = state.post.get() else {
            return view! { <div class="status-banner">"No post found"</div> }.into_any();
        };

        render_post(post).into_any()
    }
}

fn render_post(post: CampingPost) -> impl IntoView {
    let CampingPost {
        title,
        description,
        location,
        start_date,
        end_date,
        equipment,
        places,
        age_category,
        images,
        category,
        status,
        user,
        join_camping_posts,
        ..
    } = post;

    let gallery = (!images.is_empty()).then(|| {
        view! {
            <div class="gallery">
                {images
                    .into_iter()
                    .enumerate()
                    .map(|(index, image)| {
                        let alt = format!("Camping post image {}", index + 1);
                        view! { <img src=image alt=alt class="gallery-image" /> }
                    })
                    .collect_view()}
            </div>
        }
    });

    let equipment = join_or_placeholder(&equipment, "No equipment listed");
    let organizer = render_organizer(user);
    let participants = render_participants(join_camping_posts);

    view! {
        <div class="post-card">
            {gallery}

            <h1>{title}</h1>
            <p><strong>"Description: "</strong> {description}</p>
            <p><strong>"Location: "</strong> {location}</p>
            <p><strong>"Start Date: "</strong> {format_date(&start_date)}</p>
            <p><strong>"End Date: "</strong> {format_date(&end_date)}</p>
            <p><strong>"Equipment: "</strong> {equipment}</p>
            <p><strong>"Places: "</strong> {places}</p>
            <p><strong>"Age Category: "</strong> {age_category}</p>
            <p><strong>"Status: "</strong> {status}</p>
            <p><strong>"Category: "</strong> {category}</p>

            <h2>"Organizer Details"</h2>
            {organizer}

            <h2>"Joined Users"</h2>
            {participants}
        </div>
    }
}

fn render_organizer(user: User) -> impl IntoView {
    let avatar = first_profile_image(&user.images_profile)
        .map(|src| view! { <img src=src alt="Organizer Profile" class="avatar" /> });
    let interests = user.interests.join(", ");
    let date_of_birth = format_date(&user.date_of_birth);

    view! {
        <div class="user-panel">
            {avatar}
            <div>
                <p><strong>"Name: "</strong> {user.name}</p>
                <p><strong>"Email: "</strong> {user.email}</p>
                <p><strong>"Phone: "</strong> {user.phone_number}</p>
                <p><strong>"Address: "</strong> {user.address}</p>
                <p><strong>"Bio: "</strong> {user.bio}</p>
                <p><strong>"Interests: "</strong> {interests}</p>
                <p><strong>"Date of Birth: "</strong> {date_of_birth}</p>
            </div>
        </div>
    }
}

fn render_participants(joins: Vec<JoinCampingPost>) -> AnyView {
    if joins.is_empty() {
        return view! { <p>"No users have joined this camping post yet."</p> }.into_any();
    }

    joins
        .into_iter()
        .map(|join| render_participant(join).into_any())
        .collect::<Vec<_>>()
        .into_any()
}

fn render_participant(join: JoinCampingPost) -> impl IntoView {
    let avatar = first_profile_image(&join.user.images_profile)
        .map(|src| view! { <img src=src alt="User Profile" class="avatar" /> });
    let interests = join.user.interests.join(", ");

    view! {
        <div class="user-panel">
            {avatar}
            <div>
                <p><strong>"Name: "</strong> {join.user.name}</p>
                <p><strong>"Email: "</strong> {join.user.email}</p>
                <p><strong>"Phone: "</strong> {join.user.phone_number}</p>
                <p><strong>"Address: "</strong> {join.user.address}</p>
                <p><strong>"Interests: "</strong> {interests}</p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_date_takes_date_part_of_rfc3339() {
        assert_eq!(format_date("2024-07-15T00:00:00Z"), "2024-07-15");
    }

    #[test]
    fn format_date_keeps_unparseable_value_verbatim() {
        assert_eq!(format_date("next summer"), "next summer");
        assert_eq!(format_date(""), "");
    }

    #[test]
    fn join_or_placeholder_joins_with_comma() {
        let items = vec!["tent".to_string(), "stove".to_string()];
        assert_eq!(join_or_placeholder(&items, "No equipment listed"), "tent, stove");
    }

    #[test]
    fn join_or_placeholder_uses_placeholder_for_empty_list() {
        assert_eq!(
            join_or_placeholder(&[], "No equipment listed"),
            "No equipment listed"
        );
    }

    #[test]
    fn first_profile_image_returns_first_url() {
        let images = vec![
            "http://cdn.example.com/a.png".to_string(),
            "http://cdn.example.com/b.png".to_string(),
        ];
        assert_eq!(
            first_profile_image(&images).as_deref(),
            Some("http://cdn.example.com/a.png")
        );
        assert!(first_profile_image(&[]).is_none());
    }
}

use serde::Deserialize;

// Презентационные модели ответа camps API: даты и перечисления остаются
// строками и выводятся дословно, wire-имена camelCase разбирает serde.

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub email: String,
    pub password: String,
    pub name: String,
    pub address: String,
    pub interests: Vec<String>,
    pub images_profile: Vec<String>,
    pub gender: String,
    pub bio: String,
    pub phone_number: String,
    pub date_of_birth: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinCampingPost {
    pub user_id: i64,
    pub post_id: i64,
    pub rating: f64,
    pub reviews: String,
    pub favorite: String,
    pub notification: String,
    pub status: String,
    pub user: User,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampingPost {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub equipment: Vec<String>,
    pub places: u32,
    pub age_category: String,
    pub images: Vec<String>,
    pub organizer_id: i64,
    pub category: String,
    pub status: String,
    pub user: User,
    pub join_camping_posts: Vec<JoinCampingPost>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    // Код в конверте дублирует HTTP-статус; ошибки определяются по HTTP-статусу.
    #[allow(dead_code)]
    pub status: i64,
    pub data: Option<CampingPost>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_USER: &str = r#"{
        "id": 1,
        "email": "alice@example.com",
        "password": "hashed",
        "name": "alice",
        "address": "12 Forest Rd",
        "interests": ["hiking"],
        "imagesProfile": ["http://cdn.example.com/alice.png"],
        "gender": "Female",
        "bio": "Outdoors person",
        "phoneNumber": "+10000000000",
        "dateOfBirth": "1990-05-01T00:00:00Z",
        "createdAt": "2024-01-10T09:30:00Z"
    }"#;

    #[test]
    fn user_parses_camel_case_fields() {
        let user: User = serde_json::from_str(SAMPLE_USER).expect("user should parse");
        assert_eq!(user.name, "alice");
        assert_eq!(user.images_profile.len(), 1);
        assert_eq!(user.date_of_birth, "1990-05-01T00:00:00Z");
    }

    #[test]
    fn envelope_with_null_data_parses_to_none() {
        let raw = r#"{"status": 200, "data": null}"#;
        let envelope: ApiResponse = serde_json::from_str(raw).expect("envelope should parse");
        assert!(envelope.data.is_none());
    }

    #[test]
    fn envelope_with_post_parses_nested_records() {
        let raw = format!(
            r#"{{
                "status": 200,
                "data": {{
                    "id": 7,
                    "title": "Lakeside weekend",
                    "description": "Two nights by the lake",
                    "location": "Green Lake",
                    "startDate": "2024-07-15T00:00:00Z",
                    "endDate": "2024-07-17T00:00:00Z",
                    "equipment": [],
                    "places": 10,
                    "ageCategory": "ADULT",
                    "images": [],
                    "organizerId": 1,
                    "category": "Hiking",
                    "status": "PENDING",
                    "user": {SAMPLE_USER},
                    "joinCampingPosts": [
                        {{
                            "userId": 2,
                            "postId": 7,
                            "rating": 4.5,
                            "reviews": "Great trip",
                            "favorite": "true",
                            "notification": "false",
                            "status": "ACCEPTED",
                            "user": {SAMPLE_USER}
                        }}
                    ]
                }}
            }}"#
        );

        let envelope: ApiResponse = serde_json::from_str(&raw).expect("envelope should parse");
        let post = envelope.data.expect("data should be present");
        assert_eq!(post.title, "Lakeside weekend");
        assert_eq!(post.status, "PENDING");
        assert!(post.equipment.is_empty());
        assert_eq!(post.join_camping_posts[0].status, "ACCEPTED");
        assert_eq!(post.join_camping_posts[0].user.name, "alice");
    }
}

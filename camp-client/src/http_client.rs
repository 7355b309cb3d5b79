use chrono::{DateTime, Utc};
use reqwest::{Client, Method};
use serde::Deserialize;
use std::time::Duration;

use crate::error::{CampClientError, CampClientResult};
use crate::models::{
    AgeCategory, CampCategory, CampStatus, CampingPost, Gender, JoinCampingPost, JoinStatus, User,
};

#[derive(Debug, Deserialize)]
struct ErrorResponseDto {
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserDto {
    id: i64,
    email: String,
    password: String,
    name: String,
    address: String,
    interests: Vec<String>,
    images_profile: Vec<String>,
    gender: Gender,
    bio: String,
    phone_number: String,
    date_of_birth: DateTime<Utc>,
    created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JoinCampingPostDto {
    user_id: i64,
    post_id: i64,
    rating: f64,
    reviews: String,
    favorite: String,
    notification: String,
    status: JoinStatus,
    user: UserDto,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CampingPostDto {
    id: i64,
    title: String,
    description: String,
    location: String,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    equipment: Vec<String>,
    places: u32,
    age_category: AgeCategory,
    images: Vec<String>,
    organizer_id: i64,
    category: CampCategory,
    status: CampStatus,
    user: UserDto,
    join_camping_posts: Vec<JoinCampingPostDto>,
}

#[derive(Debug, Deserialize)]
struct EnvelopeDto {
    // Код в конверте дублирует HTTP-статус; ошибки определяются по HTTP-статусу.
    #[allow(dead_code)]
    status: i64,
    data: Option<CampingPostDto>,
}

impl From<UserDto> for User {
    fn from(value: UserDto) -> Self {
        Self {
            id: value.id,
            email: value.email,
            password: value.password,
            name: value.name,
            address: value.address,
            interests: value.interests,
            images_profile: value.images_profile,
            gender: value.gender,
            bio: value.bio,
            phone_number: value.phone_number,
            date_of_birth: value.date_of_birth,
            created_at: value.created_at,
        }
    }
}

impl From<JoinCampingPostDto> for JoinCampingPost {
    fn from(value: JoinCampingPostDto) -> Self {
        Self {
            user_id: value.user_id,
            post_id: value.post_id,
            rating: value.rating,
            reviews: value.reviews,
            favorite: value.favorite,
            notification: value.notification,
            status: value.status,
            user: value.user.into(),
        }
    }
}

impl From<CampingPostDto> for CampingPost {
    fn from(value: CampingPostDto) -> Self {
        Self {
            id: value.id,
            title: value.title,
            description: value.description,
            location: value.location,
            start_date: value.start_date,
            end_date: value.end_date,
            equipment: value.equipment,
            places: value.places,
            age_category: value.age_category,
            images: value.images,
            organizer_id: value.organizer_id,
            category: value.category,
            status: value.status,
            user: value.user.into(),
            join_camping_posts: value
                .join_camping_posts
                .into_iter()
                .map(JoinCampingPost::from)
                .collect(),
        }
    }
}

#[derive(Debug, Clone)]
/// HTTP-клиент для работы с REST API кемпингов.
pub struct CampClient {
    base_url: String,
    client: Client,
}

impl CampClient {
    /// Создаёт новый HTTP-клиент с базовым URL сервера.
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(15))
            .build()
            .expect("failed to build reqwest client");

        Self {
            base_url: base_url.into(),
            client,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn decode_error(response: reqwest::Response) -> CampClientError {
        let status = response.status();

        let message = match response.json::<ErrorResponseDto>().await {
            Ok(body) => body
                .error
                .unwrap_or_else(|| format!("http status {status}")),
            Err(_) => format!("http status {status}"),
        };
        CampClientError::from_http_status(status, Some(message))
    }

    /// Получает карточку похода по slug.
    ///
    /// Возвращает `Ok(None)`, если API ответил успешно, но конверт не содержит
    /// данных — «пост не найден» на стороне API не является ошибкой.
    pub async fn get_camp(&self, slug: &str) -> CampClientResult<Option<CampingPost>> {
        let url = self.endpoint(&format!("/api/camps/{slug}"));

        let request = self.client.request(Method::GET, url);

        let response = request
            .send()
            .await
            .map_err(CampClientError::from_reqwest)?;
        if !response.status().is_success() {
            return Err(Self::decode_error(response).await);
        }

        let envelope = response
            .json::<EnvelopeDto>()
            .await
            .map_err(CampClientError::from_reqwest)?;
        Ok(envelope.data.map(CampingPost::from))
    }
}

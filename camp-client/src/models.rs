use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// Все перечисления сериализуются в точности так, как их отдаёт camps API,
// и `Display` печатает те же wire-значения, чтобы отображение совпадало
// с полезной нагрузкой дословно.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Пол пользователя.
pub enum Gender {
    /// Мужской.
    Male,
    /// Женский.
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Male => "Male",
            Self::Female => "Female",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
/// Статус заявки пользователя на участие в походе.
pub enum JoinStatus {
    /// Заявка ожидает решения организатора.
    Pending,
    /// Заявка принята.
    Accepted,
    /// Заявка отклонена.
    Rejected,
}

impl fmt::Display for JoinStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pending => "PENDING",
            Self::Accepted => "ACCEPTED",
            Self::Rejected => "REJECTED",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
/// Возрастная категория похода.
pub enum AgeCategory {
    /// Для взрослых.
    Adult,
    /// Для подростков.
    Teen,
    /// Для детей.
    Kids,
}

impl fmt::Display for AgeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Adult => "ADULT",
            Self::Teen => "TEEN",
            Self::Kids => "KIDS",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Вид активности похода.
pub enum CampCategory {
    /// Пеший поход.
    Hiking,
    /// Сплав на каяках.
    Kayaking,
    /// Рыбалка.
    Fishing,
    /// Скалолазание.
    Climbing,
    /// Автостоп.
    Hitchhiking,
}

impl fmt::Display for CampCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Hiking => "Hiking",
            Self::Kayaking => "Kayaking",
            Self::Fishing => "Fishing",
            Self::Climbing => "Climbing",
            Self::Hitchhiking => "Hitchhiking",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Жизненный цикл поста похода.
pub enum CampStatus {
    /// Пост ещё не подтверждён.
    #[serde(rename = "PENDING")]
    Pending,
    /// Поход идёт.
    InProgress,
    /// Поход завершён.
    Completed,
    /// Поход отменён.
    Canceled,
    /// Поход передан другому организатору.
    Delegated,
}

impl fmt::Display for CampStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pending => "PENDING",
            Self::InProgress => "InProgress",
            Self::Completed => "Completed",
            Self::Canceled => "Canceled",
            Self::Delegated => "Delegated",
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Публичная модель пользователя.
///
/// Схема принадлежит бэкенду; клиент хранит только read-only копию,
/// включая поля, которые бэкенд отдаёт как есть.
pub struct User {
    /// Идентификатор пользователя.
    pub id: i64,
    /// Email.
    pub email: String,
    /// Учётные данные, которые бэкенд возвращает в ответе.
    pub password: String,
    /// Имя.
    pub name: String,
    /// Адрес.
    pub address: String,
    /// Интересы пользователя.
    pub interests: Vec<String>,
    /// Фотографии профиля (URL).
    pub images_profile: Vec<String>,
    /// Пол.
    pub gender: Gender,
    /// О себе.
    pub bio: String,
    /// Номер телефона.
    pub phone_number: String,
    /// Дата рождения (UTC).
    pub date_of_birth: DateTime<Utc>,
    /// Дата и время создания пользователя (UTC).
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Заявка пользователя на участие в походе.
pub struct JoinCampingPost {
    /// Идентификатор пользователя.
    pub user_id: i64,
    /// Идентификатор поста.
    pub post_id: i64,
    /// Оценка похода участником.
    pub rating: f64,
    /// Текст отзыва.
    pub reviews: String,
    /// Флаг «избранное» (бэкенд передаёт строкой).
    pub favorite: String,
    /// Флаг «уведомления» (бэкенд передаёт строкой).
    pub notification: String,
    /// Статус заявки.
    pub status: JoinStatus,
    /// Полная карточка участника.
    pub user: User,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Пост похода — основная сущность camps API.
pub struct CampingPost {
    /// Идентификатор поста.
    pub id: i64,
    /// Заголовок.
    pub title: String,
    /// Описание.
    pub description: String,
    /// Место проведения.
    pub location: String,
    /// Дата начала (UTC).
    pub start_date: DateTime<Utc>,
    /// Дата окончания (UTC).
    pub end_date: DateTime<Utc>,
    /// Список снаряжения.
    pub equipment: Vec<String>,
    /// Количество мест.
    pub places: u32,
    /// Возрастная категория.
    pub age_category: AgeCategory,
    /// Фотографии поста (URL).
    pub images: Vec<String>,
    /// Идентификатор организатора.
    pub organizer_id: i64,
    /// Вид активности.
    pub category: CampCategory,
    /// Статус поста.
    pub status: CampStatus,
    /// Карточка организатора.
    pub user: User,
    /// Заявки участников.
    pub join_camping_posts: Vec<JoinCampingPost>,
}

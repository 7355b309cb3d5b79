//! Клиентская библиотека для работы с внешним camps API по HTTP.
//!
//! Предоставляет типизированную модель данных и клиент (`CampClient`),
//! который получает карточку похода вместе с организатором и участниками:
//! `GET {base}/api/camps/{slug}`.
//!
//! Бэкенд принадлежит внешней команде: библиотека только читает его ответы
//! и не владеет схемой.
#![warn(missing_docs)]

mod error;
mod http_client;
mod models;

pub use error::{CampClientError, CampClientResult};
pub use http_client::CampClient;
pub use models::{
    AgeCategory, CampCategory, CampStatus, CampingPost, Gender, JoinCampingPost, JoinStatus, User,
};

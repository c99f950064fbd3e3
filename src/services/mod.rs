//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 저장소와 캐시 핸들을 생성자로 주입받아 사용합니다. 전역 인스턴스는 없습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let service = web::Data::new(UserService::new(store, cache, CacheSettings::from_env()));
//! App::new().app_data(service.clone());
//! ```

pub mod users;

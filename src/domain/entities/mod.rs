//! 영속 가능한 도메인 엔티티

pub mod users;

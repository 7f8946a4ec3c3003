use crate::domain::errors::DomainError;

// SQLite reports unique violations as "UNIQUE constraint failed: <table>.<column>".
const UNIQUE_ARTICLE_SLUG: &str = "articles.slug";
const UNIQUE_TOPIC_TITLE: &str = "topics.title";
const UNIQUE_SUBSCRIBER_EMAIL: &str = "subscribers.email";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            let message = db_err.message();

            if db_err.is_unique_violation() {
                return if message.contains(UNIQUE_ARTICLE_SLUG) {
                    DomainError::Conflict("slug already exists".into())
                } else if message.contains(UNIQUE_TOPIC_TITLE) {
                    DomainError::Conflict("topic already exists".into())
                } else if message.contains(UNIQUE_SUBSCRIBER_EMAIL) {
                    DomainError::Conflict("email already subscribed".into())
                } else {
                    DomainError::Conflict("unique constraint violated".into())
                };
            }

            if db_err.is_foreign_key_violation() {
                return DomainError::NotFound("referenced record not found".into());
            }

            if db_err.is_check_violation() {
                return DomainError::Validation("check constraint violated".into());
            }

            DomainError::Persistence(message.to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

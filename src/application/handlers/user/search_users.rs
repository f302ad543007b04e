//! SearchUsers - Query handler for the birth-date range search.

use std::sync::Arc;

use crate::domain::foundation::{BirthDate, DomainError};
use crate::domain::user::User;
use crate::ports::UserRepository;

/// Query for users born between two `dd/MM/yyyy` dates, both inclusive.
#[derive(Debug, Clone)]
pub struct SearchUsersQuery {
    pub from_date: String,
    pub to_date: String,
}

/// Handler for birth-date range searches.
///
/// Result order is whatever the repository returns.
pub struct SearchUsersHandler {
    repository: Arc<dyn UserRepository>,
}

impl SearchUsersHandler {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: SearchUsersQuery) -> Result<Vec<User>, DomainError> {
        let from = BirthDate::parse(&query.from_date)?;
        let to = BirthDate::parse(&query.to_date)?;

        // Equal bounds are rejected as well
        if to <= from {
            tracing::debug!(%from, %to, "Search rejected: bounds not increasing");
            return Err(DomainError::invalid_date_range());
        }

        self.repository.find_by_birth_date_between(from, to).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryUserRepository;
    use crate::domain::foundation::{Email, ErrorCode};
    use crate::domain::user::NewUser;
    use std::collections::HashSet;

    async fn five_users() -> Arc<InMemoryUserRepository> {
        let repo = Arc::new(InMemoryUserRepository::new());
        for (name, born) in [
            ("Bob", "01/02/1990"),
            ("Alice", "15/05/1985"),
            ("John", "20/09/1988"),
            ("Emily", "10/03/1995"),
            ("Michael", "28/11/1992"),
        ] {
            repo.insert(
                &NewUser::new(
                    Email::new(format!("{}@example.com", name.to_lowercase())).unwrap(),
                    name,
                    "Smith",
                    BirthDate::parse(born).unwrap(),
                    None,
                    None,
                )
                .unwrap(),
            )
            .await
            .unwrap();
        }
        repo
    }

    fn query(from: &str, to: &str) -> SearchUsersQuery {
        SearchUsersQuery {
            from_date: from.to_string(),
            to_date: to.to_string(),
        }
    }

    #[tokio::test]
    async fn test_search_returns_users_within_inclusive_range() {
        let handler = SearchUsersHandler::new(five_users().await);

        let found = handler.handle(query("02/03/1986", "10/03/1995")).await.unwrap();

        let names: HashSet<&str> = found.iter().map(|u| u.first_name()).collect();
        assert_eq!(names, HashSet::from(["Bob", "John", "Emily", "Michael"]));
    }

    #[tokio::test]
    async fn test_search_excludes_dates_past_upper_bound() {
        let handler = SearchUsersHandler::new(five_users().await);

        let found = handler.handle(query("02/03/1986", "09/03/1995")).await.unwrap();

        assert!(found.iter().all(|u| u.first_name() != "Emily"));
        assert_eq!(found.len(), 3);
    }

    #[tokio::test]
    async fn test_search_includes_both_bounds() {
        let handler = SearchUsersHandler::new(five_users().await);

        let found = handler.handle(query("28/11/1992", "10/03/1995")).await.unwrap();

        let names: HashSet<&str> = found.iter().map(|u| u.first_name()).collect();
        assert_eq!(names, HashSet::from(["Michael", "Emily"]));
    }

    #[tokio::test]
    async fn test_search_wide_range_returns_everyone() {
        let handler = SearchUsersHandler::new(five_users().await);

        let found = handler.handle(query("01/01/1900", "01/01/2000")).await.unwrap();

        assert_eq!(found.len(), 5);
    }

    #[tokio::test]
    async fn test_search_equal_bounds_rejected() {
        let handler = SearchUsersHandler::new(five_users().await);

        let err = handler.handle(query("01/01/2000", "01/01/2000")).await.unwrap_err();

        assert_eq!(err.code(), ErrorCode::InvalidDateRange);
        assert_eq!(err.message(), "'From date' must be before 'to date'");
    }

    #[tokio::test]
    async fn test_search_reversed_bounds_rejected() {
        let handler = SearchUsersHandler::new(five_users().await);

        let err = handler.handle(query("10/03/1995", "02/03/1986")).await.unwrap_err();

        assert_eq!(err.code(), ErrorCode::InvalidDateRange);
    }

    #[tokio::test]
    async fn test_search_malformed_bound() {
        let handler = SearchUsersHandler::new(five_users().await);

        let err = handler.handle(query("1986-03-02", "10/03/1995")).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidDateFormat);

        let err = handler.handle(query("02/03/1986", "tomorrow")).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidDateFormat);
    }
}

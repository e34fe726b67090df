use potato_core::{
    open_db_in_memory, DataAccessError, RepoResult, SqliteUserRepository, User, UserRepository,
    UserService,
};
use std::cell::Cell;

struct CountingRepository {
    users: Vec<User>,
    calls: Cell<usize>,
}

impl UserRepository for CountingRepository {
    fn find_all(&self) -> RepoResult<Vec<User>> {
        self.calls.set(self.calls.get() + 1);
        Ok(self.users.clone())
    }
}

struct FailingRepository;

impl UserRepository for FailingRepository {
    fn find_all(&self) -> RepoResult<Vec<User>> {
        Err(DataAccessError::MissingRequiredTable("users"))
    }
}

#[test]
fn service_delegates_find_all_to_repository() {
    let repo = CountingRepository {
        users: vec![User::new("1", "Miwa")],
        calls: Cell::new(0),
    };
    let service = UserService::new(&repo);

    assert_eq!(service.find_all().unwrap(), vec![User::new("1", "Miwa")]);
    assert_eq!(repo.calls.get(), 1);
}

#[test]
fn featured_user_is_first_listed_user() {
    let conn = open_db_in_memory().unwrap();
    conn.execute_batch(
        "INSERT INTO users (id, name) VALUES (2, 'Second');
         INSERT INTO users (id, name) VALUES (1, 'Miwa');",
    )
    .unwrap();
    let service = UserService::new(SqliteUserRepository::try_new(&conn).unwrap());

    assert_eq!(service.featured_user().unwrap(), Some(User::new("1", "Miwa")));
}

#[test]
fn featured_user_is_none_for_empty_table() {
    let conn = open_db_in_memory().unwrap();
    let service = UserService::new(SqliteUserRepository::try_new(&conn).unwrap());

    assert_eq!(service.featured_user().unwrap(), None);
}

#[test]
fn service_propagates_repository_errors_unchanged() {
    let service = UserService::new(FailingRepository);

    assert!(matches!(
        service.find_all(),
        Err(DataAccessError::MissingRequiredTable("users"))
    ));
    assert!(matches!(
        service.featured_user(),
        Err(DataAccessError::MissingRequiredTable("users"))
    ));
}

//! Postgres store tests. They need `DATABASE_URL` pointing at a server where
//! test databases may be created, so they are ignored by default:
//!
//! ```bash
//! cargo test --test integration_pg_store -- --ignored
//! ```

use std::time::Duration;

use skripsi::skripsi_core::{Role, verify_password};
use skripsi::skripsi_models::{CreateClassDto, NewUser};
use skripsi::store::{ClassStore, PgStore, Store, StoreError, UniqueField, UserStore};
use sqlx::PgPool;
use uuid::Uuid;

fn store(pool: PgPool) -> PgStore {
    PgStore::new(pool, Duration::from_secs(10))
}

fn new_user(username: Option<&str>, email: &str) -> NewUser {
    NewUser {
        nama_lengkap: "Test User".to_string(),
        username: username.map(str::to_string),
        email: email.to_string(),
        password: "testpass123".to_string(),
    }
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_create_and_lookup_user(pool: PgPool) {
    let store = store(pool);
    let id = store
        .create_user(new_user(Some("a1"), "a@x.com"), Role::Student)
        .await
        .unwrap();

    let (user, hash) = store.get_user_by_identifier("a@x.com").await.unwrap();
    assert_eq!(user.id, id);
    assert_eq!(user.peran, Role::Student);
    assert_ne!(hash, "testpass123");
    assert!(verify_password("testpass123", &hash).unwrap());

    let (by_username, _) = store.get_user_by_identifier("a1").await.unwrap();
    assert_eq!(by_username.id, id);

    assert!(matches!(
        store.get_user_by_identifier("nobody").await,
        Err(StoreError::NotFound)
    ));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_identifier_prefers_email_over_username(pool: PgPool) {
    let store = store(pool);
    store
        .create_user(new_user(Some("victim@x.com"), "mallory@x.com"), Role::Student)
        .await
        .unwrap();
    let victim = store
        .create_user(new_user(None, "victim@x.com"), Role::Student)
        .await
        .unwrap();

    let (user, _) = store.get_user_by_identifier("victim@x.com").await.unwrap();
    assert_eq!(user.id, victim);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_unique_violations_name_the_field(pool: PgPool) {
    let store = store(pool);
    store
        .create_user(new_user(Some("a1"), "a@x.com"), Role::Student)
        .await
        .unwrap();

    let err = store
        .create_user(new_user(Some("b1"), "a@x.com"), Role::Student)
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Conflict(UniqueField::Email)));

    let err = store
        .create_user(new_user(Some("a1"), "b@x.com"), Role::Student)
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Conflict(UniqueField::Username)));

    store
        .create_user(new_user(None, "c@x.com"), Role::Student)
        .await
        .unwrap();
    store
        .create_user(new_user(None, "d@x.com"), Role::Student)
        .await
        .unwrap();
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_teachers_and_delete_by_role(pool: PgPool) {
    let store = store(pool);
    assert!(store.get_teachers().await.unwrap().is_empty());

    let teacher = store
        .create_user(new_user(None, "t@x.com"), Role::Teacher)
        .await
        .unwrap();
    let student = store
        .create_user(new_user(None, "s@x.com"), Role::Student)
        .await
        .unwrap();

    let teachers = store.get_teachers().await.unwrap();
    assert_eq!(teachers.len(), 1);
    assert_eq!(teachers[0].id, teacher);

    assert_eq!(
        store
            .delete_user_by_id(&student.to_string(), Role::Teacher)
            .await
            .unwrap(),
        0
    );
    assert_eq!(
        store
            .delete_user_by_id("not-a-uuid", Role::Teacher)
            .await
            .unwrap(),
        0
    );
    assert_eq!(
        store
            .delete_user_by_id(&teacher.to_string(), Role::Teacher)
            .await
            .unwrap(),
        1
    );
    assert!(store.get_teachers().await.unwrap().is_empty());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_classes_scoped_newest_first(pool: PgPool) {
    let store = store(pool);
    let teacher = store
        .create_user(new_user(None, "t@x.com"), Role::Teacher)
        .await
        .unwrap();
    let other = store
        .create_user(new_user(None, "o@x.com"), Role::Teacher)
        .await
        .unwrap();

    for name in ["first", "second"] {
        let class = store
            .create_class(
                teacher,
                CreateClassDto {
                    nama_kelas: name.to_string(),
                    deskripsi: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(class.guru_id, teacher);
        // Keep created_at strictly increasing.
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    store
        .create_class(
            other,
            CreateClassDto {
                nama_kelas: "foreign".to_string(),
                deskripsi: Some("x".to_string()),
            },
        )
        .await
        .unwrap();

    let names: Vec<String> = store
        .get_classes_by_teacher_id(teacher)
        .await
        .unwrap()
        .into_iter()
        .map(|class| class.nama_kelas)
        .collect();
    assert_eq!(names, vec!["second", "first"]);
    assert!(
        store
            .get_classes_by_teacher_id(Uuid::new_v4())
            .await
            .unwrap()
            .is_empty()
    );

    // Classes go with their teacher.
    store
        .delete_user_by_id(&teacher.to_string(), Role::Teacher)
        .await
        .unwrap();
    assert!(store.get_classes_by_teacher_id(teacher).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_ping(pool: PgPool) {
    assert!(store(pool).ping().await.is_ok());
}

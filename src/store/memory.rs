//! In-process [`Store`] with the same observable semantics as [`PgStore`].
//!
//! Only compiled for tests and the `test-utils` feature.
//!
//! [`PgStore`]: super::PgStore

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use skripsi_core::Role;
use skripsi_models::{Class, CreateClassDto, NewUser, User};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{ClassStore, Store, StoreError, UniqueField, UserStore, hash_for_storage};

struct StoredUser {
    user: User,
    password_hash: String,
}

#[derive(Default)]
pub struct MemoryStore {
    users: RwLock<Vec<StoredUser>>,
    classes: RwLock<Vec<Class>>,
    unavailable: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent call fail as if the database timed out.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Timeout);
        }
        Ok(())
    }

    /// Stored hash for `email`, for assertions about what was persisted.
    pub async fn password_hash_for(&self, email: &str) -> Option<String> {
        self.users
            .read()
            .await
            .iter()
            .find(|stored| stored.user.email == email)
            .map(|stored| stored.password_hash.clone())
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn create_user(&self, user: NewUser, role: Role) -> Result<Uuid, StoreError> {
        self.check_available()?;
        let password_hash = hash_for_storage(user.password).await?;

        let mut users = self.users.write().await;

        if let Some(username) = &user.username
            && users
                .iter()
                .any(|stored| stored.user.username.as_ref() == Some(username))
        {
            return Err(StoreError::Conflict(UniqueField::Username));
        }

        if users.iter().any(|stored| stored.user.email == user.email) {
            return Err(StoreError::Conflict(UniqueField::Email));
        }

        let id = Uuid::new_v4();
        users.push(StoredUser {
            user: User {
                id,
                nama_lengkap: user.nama_lengkap,
                username: user.username,
                email: user.email,
                peran: role,
            },
            password_hash,
        });

        Ok(id)
    }

    async fn get_user_by_identifier(
        &self,
        identifier: &str,
    ) -> Result<(User, String), StoreError> {
        self.check_available()?;

        let users = self.users.read().await;
        // Email wins over a username holding the same text
        users
            .iter()
            .find(|stored| stored.user.email == identifier)
            .or_else(|| {
                users
                    .iter()
                    .find(|stored| stored.user.username.as_deref() == Some(identifier))
            })
            .map(|stored| (stored.user.clone(), stored.password_hash.clone()))
            .ok_or(StoreError::NotFound)
    }

    async fn get_teachers(&self) -> Result<Vec<User>, StoreError> {
        self.check_available()?;

        let mut teachers: Vec<User> = self
            .users
            .read()
            .await
            .iter()
            .filter(|stored| stored.user.peran == Role::Teacher)
            .map(|stored| stored.user.clone())
            .collect();
        teachers.sort_by(|a, b| a.nama_lengkap.cmp(&b.nama_lengkap).then(a.id.cmp(&b.id)));

        Ok(teachers)
    }

    async fn delete_user_by_id(&self, id: &str, role: Role) -> Result<u64, StoreError> {
        self.check_available()?;
        let Ok(id) = Uuid::parse_str(id) else {
            return Ok(0);
        };

        let mut users = self.users.write().await;
        let before = users.len();
        users.retain(|stored| !(stored.user.id == id && stored.user.peran == role));
        let removed = (before - users.len()) as u64;
        drop(users);

        if removed > 0 {
            self.classes.write().await.retain(|class| class.guru_id != id);
        }

        Ok(removed)
    }
}

#[async_trait]
impl ClassStore for MemoryStore {
    async fn create_class(
        &self,
        guru_id: Uuid,
        class: CreateClassDto,
    ) -> Result<Class, StoreError> {
        self.check_available()?;

        let class = Class {
            id: Uuid::new_v4(),
            guru_id,
            nama_kelas: class.nama_kelas.trim().to_string(),
            deskripsi: class.deskripsi,
            created_at: Utc::now(),
        };
        self.classes.write().await.push(class.clone());

        Ok(class)
    }

    async fn get_classes_by_teacher_id(&self, guru_id: Uuid) -> Result<Vec<Class>, StoreError> {
        self.check_available()?;

        // Reverse insertion order first so equal timestamps still list newest first.
        let mut classes: Vec<Class> = self
            .classes
            .read()
            .await
            .iter()
            .rev()
            .filter(|class| class.guru_id == guru_id)
            .cloned()
            .collect();
        classes.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(classes)
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn ping(&self) -> Result<(), StoreError> {
        self.check_available()
    }
}

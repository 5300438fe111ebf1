use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QuerySelect, Set, TransactionTrait,
};
use tracing::debug;

use crate::domain::{CreateUserOutcome, DomainResult, NewUser, User, UserRepository};
use crate::infrastructure::database::entities::user;

pub struct SeaOrmUserRepository {
    db: DatabaseConnection,
}

impl SeaOrmUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn user_model_to_domain(model: user::Model) -> User {
    User {
        id: model.id,
        username: model.username,
        email: model.email,
        password: model.password,
    }
}

fn is_unique_violation(e: &sea_orm::DbErr) -> bool {
    let msg = e.to_string();
    msg.contains("UNIQUE") || msg.contains("duplicate")
}

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn create(&self, new_user: NewUser) -> DomainResult<CreateUserOutcome> {
        debug!("Creating user: {}", new_user.username);

        let txn = self.db.begin().await?;

        let model = user::ActiveModel {
            id: NotSet,
            username: Set(new_user.username),
            email: Set(new_user.email),
            password: Set(new_user.password),
        };

        // `insert` re-reads the row, so the generated id comes back with it.
        match model.insert(&txn).await {
            Ok(created) => {
                txn.commit().await?;
                Ok(CreateUserOutcome::Created(user_model_to_domain(created)))
            }
            Err(e) if is_unique_violation(&e) => {
                debug!("Uniqueness violation on create: {}", e);
                txn.rollback().await?;
                Ok(CreateUserOutcome::Conflict)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_username(&self, username: &str) -> DomainResult<Option<User>> {
        let model = user::Entity::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await?;

        Ok(model.map(user_model_to_domain))
    }

    async fn all(&self) -> DomainResult<Vec<User>> {
        let models = user::Entity::find().all(&self.db).await?;

        Ok(models.into_iter().map(user_model_to_domain).collect())
    }

    async fn update_email(&self, username: &str, new_email: &str) -> DomainResult<Option<User>> {
        let existing = user::Entity::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        let mut active: user::ActiveModel = existing.into();
        active.email = Set(new_email.to_string());

        let updated = active.update(&self.db).await?;
        debug!("Updated email for {}", username);

        Ok(Some(user_model_to_domain(updated)))
    }

    async fn delete_by_username(&self, username: &str) -> DomainResult<bool> {
        let result = user::Entity::delete_many()
            .filter(user::Column::Username.eq(username))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn search(&self, query: &str) -> DomainResult<Vec<User>> {
        // Single OR-ed query, so a user matching on both columns shows up once.
        // SQLite LIKE is case-insensitive for ASCII; an empty query matches all.
        let models = user::Entity::find()
            .filter(
                user::Column::Username
                    .contains(query)
                    .or(user::Column::Email.contains(query)),
            )
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(user_model_to_domain).collect())
    }

    async fn page(&self, limit: u64, offset: u64) -> DomainResult<Vec<User>> {
        let models = user::Entity::find()
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(user_model_to_domain).collect())
    }
}

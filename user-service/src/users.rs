//! User handlers
//!
//! [`UserHandlers`] holds the operations without any HTTP types so they can be
//! driven directly. [`list_users`] and [`add_user`] adapt them to axum: the
//! `Json` extractor supplies the body and `IntoResponse` writes the reply.
//! A JSON body whose `name` or `email` is not a string counts as missing.
//!
//! ```text
//! GET  /users  -> 200 {"users": [{"name": ..., "email": ...}]}
//! POST /users  -> 200 {"message": "Utilisateur Alice ajouté avec succès !", "email": ...}
//!              -> 400 {"message": "Nom et email requis"}
//! ```

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{
    error::{Result, ValidationError},
    model::{NewUser, User},
    state::AppState,
    store::UserStore,
};

/// Body of `GET /users`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserList {
    pub users: Vec<User>,
}

/// Body of a successful `POST /users`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAdded {
    pub message: String,
    pub email: String,
}

impl UserAdded {
    fn for_user(user: &User) -> Self {
        Self {
            message: format!("Utilisateur {} ajouté avec succès !", user.name),
            email: user.email.clone(),
        }
    }
}

/// List and add operations over a shared [`UserStore`]
#[derive(Debug, Clone)]
pub struct UserHandlers {
    store: Arc<UserStore>,
}

impl UserHandlers {
    pub fn new(store: Arc<UserStore>) -> Self {
        Self { store }
    }

    /// Every user, oldest first
    pub async fn list(&self) -> UserList {
        UserList {
            users: self.store.list().await,
        }
    }

    /// Validate the payload and append the resulting user
    ///
    /// The store is left untouched when validation fails.
    pub async fn add(&self, payload: NewUser) -> std::result::Result<UserAdded, ValidationError> {
        let user = payload.validate()?;
        let added = UserAdded::for_user(&user);

        tracing::info!(name = %user.name, email = %user.email, "user added");
        self.store.append(user).await;

        Ok(added)
    }
}

impl From<&AppState> for UserHandlers {
    fn from(state: &AppState) -> Self {
        Self::new(Arc::clone(state.users()))
    }
}

/// `GET /users`
pub async fn list_users(State(state): State<AppState>) -> Json<UserList> {
    Json(UserHandlers::from(&state).list().await)
}

/// `POST /users`
pub async fn add_user(
    State(state): State<AppState>,
    payload: std::result::Result<Json<NewUser>, JsonRejection>,
) -> Result<Json<UserAdded>> {
    let payload = match payload {
        Ok(Json(payload)) => payload,
        Err(JsonRejection::JsonDataError(e)) => {
            tracing::debug!("Unusable user payload: {}", e.body_text());
            return Err(ValidationError::missing_name_or_email().into());
        }
        Err(rejection) => return Err(rejection.into()),
    };

    let added = UserHandlers::from(&state).add(payload).await?;
    Ok(Json(added))
}

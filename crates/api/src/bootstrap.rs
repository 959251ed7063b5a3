//! First-run admin account creation.

use gunpla_core::error::CoreError;
use gunpla_core::roles::ROLE_ADMIN;
use gunpla_db::models::user::CreateUser;
use gunpla_db::repositories::UserRepo;
use gunpla_db::DbPool;

use crate::auth::password::{hash_password, validate_password_strength, MIN_PASSWORD_LENGTH};
use crate::config::BootstrapAdmin;
use crate::error::{AppError, AppResult};

/// Create the configured admin account when the users table is empty.
///
/// Returns `true` if an account was created. Does nothing once any user
/// exists, so it is safe to run on every start.
pub async fn ensure_admin(pool: &DbPool, admin: Option<&BootstrapAdmin>) -> AppResult<bool> {
    let Some(admin) = admin else {
        return Ok(false);
    };
    if UserRepo::count(pool).await? > 0 {
        return Ok(false);
    }

    validate_password_strength(&admin.password, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
    let password_hash = hash_password(&admin.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        pool,
        &CreateUser {
            username: admin.username.clone(),
            email: admin.email.clone(),
            password_hash,
            role: ROLE_ADMIN.to_string(),
        },
    )
    .await?;

    tracing::info!(user_id = user.id, username = %user.username, "Bootstrap admin created");
    Ok(true)
}

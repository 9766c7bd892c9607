//! Account operations behind the `/auth` routes.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use fitlink_auth::password::{PasswordHasher, PasswordValidator};
use fitlink_auth::session::{IssuedToken, SessionManager};
use fitlink_core::error::AppError;
use fitlink_database::repositories::{DeviceTokenRepository, UserRepository};
use fitlink_entity::device::{DeviceToken, RegisterDevice};
use fitlink_entity::user::{CreateUser, UpdateProfile, User, UserRole};

use crate::context::RequestContext;

const BAD_CREDENTIALS: &str = "The provided credentials are incorrect.";

#[derive(Debug, Clone)]
pub struct RegisterInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
    pub role: UserRole,
    pub phone: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Clone)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
    /// Push token to bind to this user on success.
    pub device: Option<RegisterDevice>,
}

/// A user together with the token just issued for them.
#[derive(Debug, Clone, Serialize)]
pub struct AuthOutcome {
    pub user: User,
    #[serde(flatten)]
    pub token: IssuedToken,
}

#[derive(Debug, Clone)]
pub struct AuthService {
    user_repo: Arc<UserRepository>,
    device_repo: Arc<DeviceTokenRepository>,
    sessions: Arc<SessionManager>,
    hasher: Arc<PasswordHasher>,
    validator: Arc<PasswordValidator>,
}

impl AuthService {
    pub fn new(
        user_repo: Arc<UserRepository>,
        device_repo: Arc<DeviceTokenRepository>,
        sessions: Arc<SessionManager>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
    ) -> Self {
        Self {
            user_repo,
            device_repo,
            sessions,
            hasher,
            validator,
        }
    }

    pub async fn register(
        &self,
        input: RegisterInput,
        ip_address: Option<String>,
        user_agent: Option<String>,
    ) -> Result<AuthOutcome, AppError> {
        if !input.role.is_self_assignable() {
            return Err(AppError::field("role", "The selected role is invalid."));
        }
        if input.password != input.password_confirmation {
            return Err(AppError::field(
                "password",
                "The password confirmation does not match.",
            ));
        }
        self.validator
            .validate(&input.password, &[&input.name, &input.email])?;

        let email = input.email.trim().to_lowercase();
        if self.user_repo.find_by_email(&email).await?.is_some() {
            return Err(AppError::field("email", "The email has already been taken."));
        }

        let user = self
            .user_repo
            .create(&CreateUser {
                name: input.name.trim().to_string(),
                email,
                password_hash: self.hasher.hash(&input.password)?,
                role: input.role,
                phone: input.phone,
                location: input.location,
            })
            .await?;

        info!(user_id = %user.id, role = %user.role, "User registered");

        let token = self.sessions.issue(&user, ip_address, user_agent).await?;
        Ok(AuthOutcome { user, token })
    }

    pub async fn login(
        &self,
        input: LoginInput,
        ip_address: Option<String>,
        user_agent: Option<String>,
    ) -> Result<AuthOutcome, AppError> {
        let user = self
            .user_repo
            .find_by_email(input.email.trim())
            .await?
            .ok_or_else(|| AppError::field("email", BAD_CREDENTIALS))?;

        if !self.hasher.verify(&input.password, &user.password_hash)? {
            info!(user_id = %user.id, "Login rejected: wrong password");
            return Err(AppError::field("email", BAD_CREDENTIALS));
        }

        self.user_repo.touch_last_active(user.id).await?;

        if let Some(mut device) = input.device {
            device.user_id = user.id;
            self.device_repo.upsert(&device).await?;
        }

        let token = self.sessions.issue(&user, ip_address, user_agent).await?;
        info!(user_id = %user.id, session_id = %token.session_id, "User logged in");

        Ok(AuthOutcome { user, token })
    }

    pub async fn logout(&self, ctx: &RequestContext) -> Result<(), AppError> {
        self.sessions.logout(ctx.user_id, ctx.session_id).await
    }

    /// Replace every session of the caller with one fresh token.
    pub async fn refresh(&self, ctx: &RequestContext) -> Result<AuthOutcome, AppError> {
        let user = self.profile(ctx).await?;
        self.user_repo.touch_last_active(user.id).await?;
        let token = self
            .sessions
            .refresh(&user, ctx.ip_address.clone(), ctx.user_agent.clone())
            .await?;
        Ok(AuthOutcome { user, token })
    }

    pub async fn profile(&self, ctx: &RequestContext) -> Result<User, AppError> {
        self.user_repo
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    pub async fn update_profile(
        &self,
        ctx: &RequestContext,
        data: UpdateProfile,
    ) -> Result<User, AppError> {
        if let Some(dob) = data.date_of_birth {
            if dob >= ctx.today() {
                return Err(AppError::field(
                    "date_of_birth",
                    "The date of birth must be a date before today.",
                ));
            }
        }

        let user = self.user_repo.update_profile(ctx.user_id, &data).await?;
        info!(user_id = %ctx.user_id, "Profile updated");
        Ok(user)
    }

    /// Change the caller's password and revoke every session they hold.
    pub async fn change_password(
        &self,
        ctx: &RequestContext,
        current_password: &str,
        new_password: &str,
        new_password_confirmation: &str,
    ) -> Result<(), AppError> {
        let user = self.profile(ctx).await?;

        if !self.hasher.verify(current_password, &user.password_hash)? {
            return Err(AppError::business_rule("Current password is incorrect"));
        }
        if new_password != new_password_confirmation {
            return Err(AppError::field(
                "new_password",
                "The new password confirmation does not match.",
            ));
        }
        self.validator
            .validate_not_same(current_password, new_password)?;
        self.validator
            .validate(new_password, &[&user.name, &user.email])?;

        let hash = self.hasher.hash(new_password)?;
        self.user_repo.update_password(user.id, &hash).await?;
        self.sessions.revoke_all(user.id, "password_change").await?;

        info!(user_id = %user.id, "Password changed");
        Ok(())
    }

    pub async fn register_device(
        &self,
        ctx: &RequestContext,
        mut device: RegisterDevice,
    ) -> Result<DeviceToken, AppError> {
        device.user_id = ctx.user_id;
        let token = self.device_repo.upsert(&device).await?;
        info!(user_id = %ctx.user_id, platform = %token.platform, "Device token registered");
        Ok(token)
    }

    pub async fn remove_device(&self, ctx: &RequestContext, token: &str) -> Result<(), AppError> {
        if !self.device_repo.deactivate(ctx.user_id, token).await? {
            return Err(AppError::not_found("Device token not found"));
        }
        info!(user_id = %ctx.user_id, "Device token deactivated");
        Ok(())
    }

    /// Look up any user by id, for checks made by other services.
    pub async fn find_user(&self, user_id: Uuid) -> Result<Option<User>, AppError> {
        self.user_repo.find_by_id(user_id).await
    }
}

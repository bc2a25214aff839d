use time::OffsetDateTime;
use tracing::{info, warn};
use uuid::Uuid;

use super::{
    dto::{LoginRequest, SignupRequest},
    password::{check_strength, hash_password, verify_password},
    repo_types::{Account, PublicAccount},
};
use crate::{errors::AppError, state::AppState, validation::is_valid_email};

fn normalize_email(raw: &str) -> Result<String, AppError> {
    let email = raw.trim().to_lowercase();
    if !is_valid_email(&email) {
        return Err(AppError::validation("Please enter a valid email address"));
    }
    Ok(email)
}

pub async fn signup(st: &AppState, req: SignupRequest) -> Result<PublicAccount, AppError> {
    let name = req.name.trim();
    if name.is_empty() {
        return Err(AppError::validation("Name is required"));
    }
    let email = normalize_email(&req.email)?;
    check_strength(&req.password)?;

    if st.accounts.find_by_email(&email).await.is_some() {
        warn!(%email, "email already registered");
        return Err(AppError::validation("Email already in use"));
    }

    let account = Account {
        id: Uuid::new_v4(),
        name: name.to_string(),
        email,
        password_hash: hash_password(&req.password)?,
        created_at: OffsetDateTime::now_utc(),
    };
    // A concurrent signup may have taken the email since the lookup.
    let account = st
        .accounts
        .insert(account)
        .await
        .ok_or_else(|| AppError::validation("Email already in use"))?;

    info!(account_id = %account.id, email = %account.email, "account created");
    Ok(PublicAccount::from(&account))
}

pub async fn login(st: &AppState, req: LoginRequest) -> Result<PublicAccount, AppError> {
    let email = normalize_email(&req.email)?;
    let Some(account) = st.accounts.find_by_email(&email).await else {
        warn!(%email, "login unknown email");
        return Err(AppError::InvalidCredentials);
    };
    if !verify_password(&req.password, &account.password_hash)? {
        warn!(account_id = %account.id, "login invalid password");
        return Err(AppError::InvalidCredentials);
    }
    info!(account_id = %account.id, "account logged in");
    Ok(PublicAccount::from(&account))
}

//! In-memory identity provider for development and tests.
//!
//! Accounts and sessions live for the lifetime of the process. Passwords are
//! kept as salted SHA-256 digests and sessions are indexed by the digest of
//! their token. Production deployments put a managed provider behind
//! [`IdentityProvider`] instead.

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;
use uuid::Uuid;

use crate::identity::{
    domain::{Credentials, EmailAddress, Password, SessionToken, UserId},
    ports::{IdentityError, IdentityProvider, IdentityResult, Session},
};

/// Thread-safe in-memory identity provider.
#[derive(Debug, Clone, Default)]
pub struct InMemoryIdentityProvider {
    state: Arc<RwLock<IdentityState>>,
}

#[derive(Debug, Default)]
struct IdentityState {
    accounts: HashMap<EmailAddress, Account>,
    sessions: HashMap<String, UserId>,
}

#[derive(Debug)]
struct Account {
    user_id: UserId,
    salt: String,
    password_digest: String,
}

impl InMemoryIdentityProvider {
    /// Creates a provider with no accounts.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read_state(&self) -> IdentityResult<RwLockReadGuard<'_, IdentityState>> {
        self.state
            .read()
            .map_err(|err| IdentityError::provider(std::io::Error::other(err.to_string())))
    }

    fn write_state(&self) -> IdentityResult<RwLockWriteGuard<'_, IdentityState>> {
        self.state
            .write()
            .map_err(|err| IdentityError::provider(std::io::Error::other(err.to_string())))
    }
}

fn digest_password(salt: &str, password: &Password) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.expose().as_bytes());
    hex::encode(hasher.finalize())
}

fn digest_token(token: &SessionToken) -> String {
    hex::encode(Sha256::digest(token.as_str().as_bytes()))
}

fn open_session(state: &mut IdentityState, user_id: UserId) -> Session {
    let token = SessionToken::generate();
    state.sessions.insert(digest_token(&token), user_id);
    Session { token, user_id }
}

#[async_trait]
impl IdentityProvider for InMemoryIdentityProvider {
    async fn sign_up(&self, credentials: &Credentials) -> IdentityResult<Session> {
        let mut state = self.write_state()?;
        let email = credentials.email();
        if state.accounts.contains_key(email) {
            return Err(IdentityError::DuplicateAccount(email.clone()));
        }

        let salt = Uuid::new_v4().simple().to_string();
        let account = Account {
            user_id: UserId::new(),
            password_digest: digest_password(&salt, credentials.password()),
            salt,
        };
        let user_id = account.user_id;
        state.accounts.insert(email.clone(), account);
        debug!(%user_id, "registered account");
        Ok(open_session(&mut state, user_id))
    }

    async fn sign_in(&self, credentials: &Credentials) -> IdentityResult<Session> {
        let mut state = self.write_state()?;
        let user_id = state
            .accounts
            .get(credentials.email())
            .filter(|account| {
                digest_password(&account.salt, credentials.password()) == account.password_digest
            })
            .map(|account| account.user_id)
            .ok_or(IdentityError::InvalidCredentials)?;
        debug!(%user_id, "signed in");
        Ok(open_session(&mut state, user_id))
    }

    async fn sign_out(&self, token: &SessionToken) -> IdentityResult<()> {
        let mut state = self.write_state()?;
        if let Some(user_id) = state.sessions.remove(&digest_token(token)) {
            debug!(%user_id, "signed out");
        }
        Ok(())
    }

    async fn current_user(&self, token: &SessionToken) -> IdentityResult<Option<UserId>> {
        let state = self.read_state()?;
        Ok(state.sessions.get(&digest_token(token)).copied())
    }
}

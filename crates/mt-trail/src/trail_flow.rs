//! Registration and login flow.
//!
//! Orchestrates the user store, the identity generator and the session
//! pointer. Storage is injected so the flow runs the same against files or
//! in-memory slots.

use crate::{
    Dashboard, DashboardView, FlowError, FlowMode, IdentityGenerator, Result as FlowResult,
};

use mt_core::{Clock, Kiosk, UserRecord};
use mt_store::{SessionRepository, UserRepository};

use std::sync::Arc;

use log::{debug, info};

const INVALID_NAME_MESSAGE: &str = "Please enter your full name.";
const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address.";
const MISSING_TRAIL_ID_MESSAGE: &str = "Please enter your Trail ID";

pub struct TrailFlow {
    users: UserRepository,
    session: SessionRepository,
    generator: IdentityGenerator,
    clock: Arc<dyn Clock>,
    min_name_length: usize,
    mode: FlowMode,
}

impl TrailFlow {
    pub fn new(
        users: UserRepository,
        session: SessionRepository,
        generator: IdentityGenerator,
        clock: Arc<dyn Clock>,
        min_name_length: usize,
    ) -> Self {
        Self {
            users,
            session,
            generator,
            clock,
            min_name_length,
            mode: FlowMode::default(),
        }
    }

    pub fn mode(&self) -> FlowMode {
        self.mode
    }

    pub fn show_login(&mut self) {
        self.mode = FlowMode::LoggingIn;
    }

    pub fn show_register(&mut self) {
        self.mode = FlowMode::Registering;
    }

    pub fn toggle_mode(&mut self) -> FlowMode {
        self.mode = self.mode.toggled();
        self.mode
    }

    pub fn users(&self) -> &UserRepository {
        &self.users
    }

    /// Creates a user, stores it and signs it in.
    ///
    /// The name is trimmed; the email is trimmed and lowercased before the
    /// duplicate check.
    ///
    /// The user is stored before the session is set. If setting the session
    /// fails, the record stays and a retry with the same email is rejected as
    /// a duplicate; the visitor can log in with the Trail ID instead.
    pub fn register(&mut self, full_name: &str, email: &str) -> FlowResult<UserRecord> {
        let full_name = full_name.trim();
        let email = email.trim().to_lowercase();

        if full_name.chars().count() < self.min_name_length {
            return Err(FlowError::validation(INVALID_NAME_MESSAGE));
        }
        if !is_valid_email(&email) {
            return Err(FlowError::validation(INVALID_EMAIL_MESSAGE));
        }
        if self.users.exists_by_email(&email)? {
            return Err(FlowError::duplicate_email(email));
        }

        let existing = self.users.list()?;
        let trail_id = self
            .generator
            .generate_trail_id(|candidate| existing.iter().any(|u| &u.trail_id == candidate))?;
        let username = self.generator.generate_username(full_name);

        let user = UserRecord::new(
            full_name.to_string(),
            email,
            trail_id,
            username,
            self.clock.now(),
        );

        self.users.insert(&user)?;
        self.session.set(&user)?;

        info!("Registered {} as {}", user.trail_id, user.username);
        Ok(user)
    }

    /// Signs in an existing user. Input is trimmed and uppercased.
    pub fn login(&mut self, trail_id_input: &str) -> FlowResult<UserRecord> {
        let trail_id = trail_id_input.trim().to_uppercase();
        if trail_id.is_empty() {
            return Err(FlowError::validation(MISSING_TRAIL_ID_MESSAGE));
        }

        let Some(mut user) = self.users.find_by_trail_id(&trail_id)? else {
            debug!("Login failed, no user {trail_id}");
            return Err(FlowError::not_found(trail_id));
        };

        user.touch(self.clock.now());
        self.users.replace(&user)?;
        self.session.set(&user)?;

        info!("Logged in {}", user.trail_id);
        Ok(user)
    }

    /// Clears the session. Stored users are untouched.
    pub fn logout(&mut self) -> FlowResult<()> {
        self.session.clear()?;
        Ok(())
    }

    pub fn current_user(&self) -> FlowResult<Option<UserRecord>> {
        Ok(self.session.current()?)
    }

    /// Marks a kiosk complete for the signed-in user.
    ///
    /// Works from the stored record rather than the session snapshot, so a
    /// stale snapshot cannot roll back progress.
    pub fn record_completion(&mut self, kiosk: Kiosk) -> FlowResult<UserRecord> {
        let current = self
            .session
            .current()?
            .ok_or_else(FlowError::no_active_session)?;

        let Some(mut user) = self.users.find_by_trail_id(current.trail_id.as_str())? else {
            return Err(FlowError::not_found(current.trail_id.to_string()));
        };

        if user.record_completion(kiosk) {
            info!(
                "{} completed {} (card version {})",
                user.trail_id, kiosk, user.card_version
            );
        } else {
            debug!("{} already completed {kiosk}", user.trail_id);
        }

        user.touch(self.clock.now());
        self.users.replace(&user)?;
        self.session.set(&user)?;

        Ok(user)
    }

    pub fn dashboard(&self) -> FlowResult<DashboardView> {
        let user = self
            .session
            .current()?
            .ok_or_else(FlowError::no_active_session)?;

        Ok(Dashboard::build(&user, self.clock.now()))
    }
}

/// `local@domain.tld` shape check: no whitespace, exactly one `@`, and a dot
/// inside the domain with text on both sides.
pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

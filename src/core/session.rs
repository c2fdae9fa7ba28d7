//! Application state and the pinned-view state machine.
//!
//! State lives in the `app_state` table and is mutated only through the
//! actions below: created at startup via [`AppState::load`], torn down by
//! [`AppState::sign_out`].

use crate::db::log::oplog;
use crate::db::pool::DbPool;
use crate::db::state::{self, KEY_PINNED, KEY_THEME, KEY_USER, KEY_VIEW};
use crate::db::store;
use crate::errors::AppResult;
use crate::models::category::Category;
use crate::models::place::Place;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Named states of the pinned-forecast view. Replaces the old reliance on
/// component mount/unmount ordering: pinned data exists exactly while the
/// machine is in `ShowingPinned`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewState {
    Idle,
    ShowingPinned,
    ShowingDefault,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEvent {
    PinSelected,
    PinCleared,
    DefaultLoaded,
}

impl ViewState {
    /// Transition function. Unexpected events leave the state unchanged.
    pub fn apply(self, event: ViewEvent) -> ViewState {
        match (self, event) {
            (_, ViewEvent::PinSelected) => ViewState::ShowingPinned,
            (ViewState::ShowingPinned, ViewEvent::PinCleared) => ViewState::ShowingDefault,
            (state, ViewEvent::PinCleared) => state,
            (ViewState::Idle, ViewEvent::DefaultLoaded) => ViewState::ShowingDefault,
            (state, ViewEvent::DefaultLoaded) => state,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ViewState::Idle => "idle",
            ViewState::ShowingPinned => "showing-pinned",
            ViewState::ShowingDefault => "showing-default",
        }
    }
}

pub struct AppState {
    pub user: Option<UserProfile>,
    pub theme: String,
    pub pinned: Option<Place>,
    pub view: ViewState,
}

impl AppState {
    /// Build the application state from persisted values. Missing or corrupt
    /// entries fall back to defaults.
    pub fn load(pool: &mut DbPool) -> AppResult<Self> {
        let user = state::get_json(pool, KEY_USER)?;
        let theme = state::get_json::<String>(pool, KEY_THEME)?.unwrap_or_else(|| "dark".to_string());
        let pinned = state::get_json(pool, KEY_PINNED)?;
        let view = state::get_json::<ViewState>(pool, KEY_VIEW)?.unwrap_or(ViewState::Idle);

        Ok(Self {
            user,
            theme,
            pinned,
            view,
        })
    }

    pub fn sign_in(&mut self, pool: &mut DbPool, user: UserProfile) -> AppResult<()> {
        state::set_json(pool, KEY_USER, &user)?;
        oplog(&pool.conn, "login", &user.name, "session opened")?;
        self.user = Some(user);
        Ok(())
    }

    /// Tear the session down: user, pinned place, and view state are
    /// removed, and both activity logs are cleared. The theme preference
    /// survives as a device-level setting.
    pub fn sign_out(&mut self, pool: &mut DbPool) -> AppResult<()> {
        let name = self
            .user
            .take()
            .map(|u| u.name)
            .unwrap_or_else(|| "-".to_string());

        state::delete(pool, KEY_USER)?;
        state::delete(pool, KEY_PINNED)?;
        state::delete(pool, KEY_VIEW)?;

        for category in Category::all() {
            store::clear(pool, category)?;
        }

        oplog(&pool.conn, "logout", &name, "session closed, activity cleared")?;

        self.pinned = None;
        self.view = ViewState::Idle;
        Ok(())
    }

    pub fn set_theme(&mut self, pool: &mut DbPool, theme: &str) -> AppResult<()> {
        state::set_json(pool, KEY_THEME, &theme.to_string())?;
        self.theme = theme.to_string();
        Ok(())
    }

    /// Pin a place: persists it and moves the view machine to ShowingPinned.
    pub fn pin(&mut self, pool: &mut DbPool, place: Place) -> AppResult<()> {
        self.view = self.view.apply(ViewEvent::PinSelected);
        state::set_json(pool, KEY_PINNED, &place)?;
        state::set_json(pool, KEY_VIEW, &self.view)?;
        self.pinned = Some(place);
        Ok(())
    }

    /// Clear the pinned place. The pinned data is dropped exactly on the
    /// ShowingPinned -> ShowingDefault transition.
    pub fn unpin(&mut self, pool: &mut DbPool) -> AppResult<()> {
        let next = self.view.apply(ViewEvent::PinCleared);
        if next != self.view {
            state::delete(pool, KEY_PINNED)?;
            self.pinned = None;
        }
        self.view = next;
        state::set_json(pool, KEY_VIEW, &self.view)?;
        Ok(())
    }
}

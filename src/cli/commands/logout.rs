use crate::config::Config;
use crate::core::session::AppState;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut pool = DbPool::new(&cfg.database)?;

    let mut app = AppState::load(&mut pool)?;
    if app.user.is_none() {
        warning("No active session.");
    }

    app.sign_out(&mut pool)?;

    success("Signed out. Pinned data and activity logs cleared.");
    Ok(())
}

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::{AppState, UserProfile};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Login { user, email } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        let mut app = AppState::load(&mut pool)?;
        app.sign_in(
            &mut pool,
            UserProfile {
                name: user.clone(),
                email: email.clone(),
            },
        )?;

        success(format!("Signed in as {}", user));
    }
    Ok(())
}

use crate::config::Config;
use crate::core::pin::PinLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut pool = DbPool::new(&cfg.database)?;
    PinLogic::clear(&mut pool)
}

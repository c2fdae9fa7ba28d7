use crate::config::Config;
use crate::core::session::AppState;
use crate::db::log::oplog;
use crate::db::pool::DbPool;
use crate::db::store;
use crate::errors::{AppError, AppResult};
use crate::models::category::Category;
use crate::models::place::Place;
use crate::models::record::LogRecord;
use crate::models::severity::Severity;
use crate::ui::messages::{success, warning};
use crate::utils::colors::{RESET, color_for_severity};

pub struct ReportLogic;

impl ReportLogic {
    /// Report an emergency at a place. Requires an active session: the
    /// report carries the reporting user.
    ///
    /// The report itself must never fail on history-storage trouble; a
    /// storage failure is logged and surfaced as a warning only.
    pub fn apply(
        pool: &mut DbPool,
        _cfg: &Config,
        place: Place,
        event: &str,
        severity: Severity,
        details: &str,
    ) -> AppResult<()> {
        let app = AppState::load(pool)?;
        let user = app.user.ok_or(AppError::NoSession)?;

        let record = LogRecord::emergency(
            &place,
            event,
            severity,
            details,
            Some(user.name.clone()),
        );

        if let Err(e) = store::append(pool, Category::Emergencies, record) {
            warning(format!("Could not persist emergency pin: {}", e));
            let _ = oplog(
                &pool.conn,
                "store_error",
                Category::Emergencies.storage_key(),
                &e.to_string(),
            );
        }

        oplog(
            &pool.conn,
            "report",
            &place.city,
            &format!("{} ({})", event, severity.sv_as_str()),
        )?;

        success(format!(
            "Reported {} with {}{}{} severity at {}",
            event,
            color_for_severity(severity.sv_as_str()),
            severity.sv_as_str(),
            RESET,
            place.city
        ));

        Ok(())
    }
}

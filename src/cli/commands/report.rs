use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::ReportLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::place::{Address, Place, UNKNOWN_CITY};
use crate::models::severity::Severity;

/// Report an emergency.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        event,
        severity,
        city,
        lat,
        lng,
        details,
        address,
    } = cmd
    {
        //
        // 1. Parse severity (config default when omitted)
        //
        let sev_code = severity.clone().unwrap_or_else(|| cfg.default_severity.clone());
        let sev = Severity::from_code(&sev_code)
            .ok_or_else(|| AppError::InvalidSeverity(sev_code.clone()))?;

        //
        // 2. Resolve the place; a report without any place information still
        //    goes through under the placeholder label.
        //
        let place = match (city, address) {
            (_, Some(raw)) => {
                let addr = Address::from_json(raw)?;
                let mut p = addr.to_place(*lat, *lng);
                if let Some(c) = city
                    && !c.trim().is_empty()
                {
                    p.city = c.trim().to_string();
                }
                p
            }
            (Some(c), None) => Place::new(c, *lat, *lng),
            (None, None) => Place::new(UNKNOWN_CITY, *lat, *lng),
        };

        //
        // 3. Open DB and execute logic
        //
        let mut pool = DbPool::new(&cfg.database)?;
        ReportLogic::apply(
            &mut pool,
            cfg,
            place,
            event,
            sev,
            details.as_deref().unwrap_or(""),
        )?;
    }

    Ok(())
}

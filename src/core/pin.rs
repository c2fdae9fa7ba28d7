use crate::config::Config;
use crate::core::session::AppState;
use crate::db::log::oplog;
use crate::db::pool::DbPool;
use crate::db::store;
use crate::errors::AppResult;
use crate::models::category::Category;
use crate::models::place::Place;
use crate::models::record::LogRecord;
use crate::ui::messages::{success, warning};

pub struct PinLogic;

impl PinLogic {
    /// Pin a place: record the visit in the activity log and move the view
    /// machine to showing-pinned.
    ///
    /// The history append must never block the pin itself: a storage failure
    /// is logged and reported as a warning, and the flow continues.
    pub fn apply(pool: &mut DbPool, cfg: &Config, place: Place) -> AppResult<()> {
        let record = LogRecord::visit(&place);
        if let Err(e) = store::append(pool, Category::Visits, record) {
            warning(format!("Could not record visit history: {}", e));
            let _ = oplog(
                &pool.conn,
                "store_error",
                Category::Visits.storage_key(),
                &e.to_string(),
            );
        }

        let mut app = AppState::load(pool)?;
        app.pin(pool, place.clone())?;

        oplog(&pool.conn, "pin", &place.city, "place pinned")?;

        if cfg.show_coords
            && let (Some(lat), Some(lng)) = (place.lat, place.lng)
        {
            success(format!(
                "Pinned {} ({:.4}, {:.4}) | view: {}",
                place.city,
                lat,
                lng,
                app.view.label()
            ));
        } else {
            success(format!("Pinned {} | view: {}", place.city, app.view.label()));
        }

        Ok(())
    }

    /// Clear the pinned place, returning the view to showing-default.
    pub fn clear(pool: &mut DbPool) -> AppResult<()> {
        let mut app = AppState::load(pool)?;
        let had_pin = app.pinned.is_some();
        app.unpin(pool)?;

        oplog(&pool.conn, "unpin", "-", "pinned place cleared")?;

        if had_pin {
            success(format!("Pin cleared | view: {}", app.view.label()));
        } else {
            warning(format!("Nothing pinned | view: {}", app.view.label()));
        }
        Ok(())
    }
}

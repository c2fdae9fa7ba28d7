use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::pin::PinLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::place::{Address, Place};

/// Pin a place. The place label comes either from the positional CITY
/// argument or from a raw geocoder --address payload.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Pin {
        city,
        lat,
        lng,
        label,
        address,
    } = cmd
    {
        //
        // 1. Resolve the place
        //
        let mut place = match (city, address) {
            (_, Some(raw)) => {
                let addr = Address::from_json(raw)?;
                addr.to_place(*lat, *lng)
            }
            (Some(c), None) => Place::new(c, *lat, *lng),
            (None, None) => {
                return Err(AppError::Other(
                    "Provide a CITY argument or --address".to_string(),
                ));
            }
        };

        // An explicit CITY argument wins over the geocoded label.
        if let (Some(c), Some(_)) = (city, address)
            && !c.trim().is_empty()
        {
            place.city = c.trim().to_string();
        }
        if let Some(l) = label {
            place.full_label = Some(l.clone());
        }

        //
        // 2. Open DB and execute logic
        //
        let mut pool = DbPool::new(&cfg.database)?;
        PinLogic::apply(&mut pool, cfg, place)?;
    }

    Ok(())
}

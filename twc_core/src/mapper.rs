//! Translation of remote pickup records into calendar events.

use chrono::{DateTime, Days, SecondsFormat, Utc};

use crate::{
    error::Error, ical::CalendarEvent, waste::WasteType, waste_client::PickupRecord,
};

/// Domain suffix making event uids globally unique.
///
/// Changing this value is a breaking change: subscribed clients would see
/// every event as new.
static UID_DOMAIN: &str = "tjallingt.com";

/// Map pickup records to one all-day calendar event per pickup date.
///
/// Output order follows record order, then date order within each record.
/// A record with a category code missing from the [`WasteType`] table fails
/// the whole mapping with [`Error::UnknownCategory`]; no partial output is
/// produced.
pub fn map_pickups(pickups: &[PickupRecord]) -> Result<Vec<CalendarEvent>, Error> {
    let mut events = vec![];
    for pickup in pickups {
        let waste_type = WasteType::from_code(&pickup.category)
            .ok_or_else(|| Error::UnknownCategory(pickup.category.clone()))?;
        for pickup_date in &pickup.pickup_dates {
            events.push(CalendarEvent {
                uid: event_uid(pickup_date, waste_type),
                creation_date: *pickup_date,
                start_date: *pickup_date,
                // one calendar day later, exclusive end
                end_date: *pickup_date + Days::new(1),
                summary: String::from(waste_type.label()),
            });
        }
    }
    Ok(events)
}

/// Get a unique id for a waste collection type on a specific day.
///
/// Re-fetching the same schedule yields the same id.
fn event_uid(pickup_date: &DateTime<Utc>, waste_type: WasteType) -> String {
    format!(
        "{}-{}@{UID_DOMAIN}",
        pickup_date.to_rfc3339_opts(SecondsFormat::Millis, true),
        waste_type.code(),
    )
}

//! Feed orchestration: resolve the address, fetch its pickups, build the
//! calendar document. Both the server and the CLI call [`get`].

use chrono::{Duration, Months, Utc};

use crate::{
    error::Error, ical::build_document, mapper::map_pickups, waste_client::WasteApiClient,
};

/// Product identifier embedded in the generated feed.
pub static FEED_ID: &str = "TwenteMilieu/Afvalkalender";

// The window reaches back a few days so pickups published around midnight
// survive client clock skew, and one year ahead.
static LOOKBACK_DAYS: i64 = 7;
static LOOKAHEAD_MONTHS: u32 = 12;

/// Get the calendar feed for a specific address.
///
/// Fails with [`Error::AddressNotFound`] when the post code and house number
/// match no address and with [`Error::AmbiguousAddress`] when they match
/// more than one; in both cases no pickup schedule is fetched.
pub async fn get(
    client: &WasteApiClient,
    post_code: &str,
    house_number: &str,
    house_letter: &str,
) -> Result<String, Error> {
    if post_code.trim().is_empty() {
        return Err(Error::MissingParameter("postCode"));
    }
    if house_number.trim().is_empty() {
        return Err(Error::MissingParameter("houseNumber"));
    }
    let mut addresses = client
        .fetch_addresses(post_code, house_number, house_letter)
        .await?;
    let address = match addresses.len() {
        0 => return Err(Error::AddressNotFound),
        1 => addresses.remove(0),
        count => return Err(Error::AmbiguousAddress(count)),
    };
    tracing::debug!(
        street = %address.street,
        house_number = %address.house_number,
        city = %address.city,
        "resolved address"
    );
    let now = Utc::now();
    let pickups = client
        .fetch_pickups(
            &address.unique_id,
            now - Duration::days(LOOKBACK_DAYS),
            now + Months::new(LOOKAHEAD_MONTHS),
        )
        .await?;
    let events = map_pickups(&pickups)?;
    tracing::info!(events = events.len(), "built calendar feed");
    Ok(build_document(FEED_ID, &events))
}

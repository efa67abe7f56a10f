//! This client resolves addresses and fetches pickup schedules from the
//! Ximmio waste API.
//!
//! Both operations are JSON-over-HTTP POST calls whose responses arrive in
//! a generic envelope wrapping a list of untyped entries. Validation runs in
//! two explicit passes so that a broken envelope and a broken entry fail
//! with distinguishable errors: first the envelope shape, then each entry
//! against the expected payload shape.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};

use crate::{config::ApiConfig, error::Error};

// The remote really spells the operation without the second "d".
static FETCH_ADDRESS_OPERATION: &str = "FetchAdress";
static FETCH_PICKUPS_OPERATION: &str = "GetCalendar";

/// The remote represents an absent house letter as a single blank space,
/// never as an empty string.
pub static NO_HOUSE_LETTER: &str = " ";

static PICKUP_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Client for the two waste API operations the feed depends on.
pub struct WasteApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl WasteApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Resolve the addresses registered for a post code and house
    /// number/letter combination.
    ///
    /// Pass [`NO_HOUSE_LETTER`] when the address has no house letter.
    pub async fn fetch_addresses(
        &self,
        post_code: &str,
        house_number: &str,
        house_letter: &str,
    ) -> Result<Vec<Address>, Error> {
        self.post(
            FETCH_ADDRESS_OPERATION,
            &FetchAddressRequest {
                company_code: &self.config.company_code,
                post_code,
                house_number,
                house_letter,
            },
            "address",
        )
        .await
    }

    /// Fetch the pickup records scheduled for an address over a date range.
    pub async fn fetch_pickups(
        &self,
        address_id: &str,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Result<Vec<PickupRecord>, Error> {
        self.post(
            FETCH_PICKUPS_OPERATION,
            &FetchPickupsRequest {
                company_code: &self.config.company_code,
                unique_address_id: address_id,
                start_date: format_request_date(start_date),
                end_date: format_request_date(end_date),
            },
            "pickup record",
        )
        .await
    }

    async fn post<B, T>(
        &self,
        operation: &str,
        body: &B,
        payload_kind: &'static str,
    ) -> Result<Vec<T>, Error>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let response = self
            .http
            .post(format!("{}/{}", self.config.base_url, operation))
            .json(body)
            .send()
            .await?
            .error_for_status()?;
        let bytes = response.bytes().await?;
        let envelope: ApiEnvelope =
            serde_json::from_slice(&bytes).map_err(Error::InvalidEnvelope)?;
        if !envelope.status {
            tracing::warn!(
                operation,
                message_code = envelope.message_code,
                "waste API reported an unsuccessful status"
            );
        }
        envelope
            .data_list
            .into_iter()
            .map(|entry| {
                serde_json::from_value(entry).map_err(|source| Error::InvalidPayload {
                    kind: payload_kind,
                    source,
                })
            })
            .collect()
    }
}

/// The generic envelope every waste API response is wrapped in.
///
/// Only the fields the feed consumes are modeled; the entries of `dataList`
/// stay untyped until the payload validation pass.
#[derive(Debug, Deserialize)]
struct ApiEnvelope {
    #[serde(rename = "dataList")]
    data_list: Vec<serde_json::Value>,
    status: bool,
    #[serde(rename = "messageCode")]
    message_code: i64,
}

/// The subset of the remote address shape the feed consumes.
#[derive(Debug, Clone, Deserialize)]
pub struct Address {
    #[serde(rename = "UniqueId")]
    pub unique_id: String,
    #[serde(rename = "Street")]
    pub street: String,
    #[serde(rename = "HouseNumber")]
    pub house_number: String,
    #[serde(rename = "HouseLetter")]
    pub house_letter: String,
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "ZipCode")]
    pub zip_code: String,
}

/// A scheduled pickup: one waste category plus the dates it is collected.
#[derive(Debug, Clone, Deserialize)]
pub struct PickupRecord {
    /// Category code, resolved against the label table by the mapper.
    #[serde(rename = "_pickupTypeText")]
    pub category: String,
    #[serde(rename = "pickupDates", deserialize_with = "deserialize_pickup_dates")]
    pub pickup_dates: Vec<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FetchAddressRequest<'a> {
    company_code: &'a str,
    post_code: &'a str,
    house_number: &'a str,
    house_letter: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FetchPickupsRequest<'a> {
    company_code: &'a str,
    #[serde(rename = "uniqueAddressID")]
    unique_address_id: &'a str,
    start_date: String,
    end_date: String,
}

fn format_request_date(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn deserialize_pickup_dates<'de, D>(deserializer: D) -> Result<Vec<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<String>::deserialize(deserializer)?;
    raw.iter()
        .map(|text| parse_pickup_date(text).map_err(serde::de::Error::custom))
        .collect()
}

// The remote reports pickup dates without an offset ("2024-03-05T00:00:00");
// they are UTC by contract. Full RFC 3339 timestamps are accepted as well.
fn parse_pickup_date(text: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(text)
        .map(|date_time| date_time.with_timezone(&Utc))
        .or_else(|_| {
            NaiveDateTime::parse_from_str(text, PICKUP_DATE_FORMAT).map(|naive| naive.and_utc())
        })
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};
    use mockito::Matcher;
    use serde_json::json;

    use crate::{
        config::ApiConfig,
        error::Error,
        waste_client::{WasteApiClient, NO_HOUSE_LETTER},
    };

    fn test_client(server: &mockito::ServerGuard) -> WasteApiClient {
        WasteApiClient::new(ApiConfig {
            base_url: server.url(),
            company_code: String::from("test-company"),
        })
    }

    fn date(text: &str) -> DateTime<Utc> {
        text.parse().unwrap()
    }

    fn address_json() -> serde_json::Value {
        json!({
            "UniqueId": "0000000001",
            "Street": "Lasondersingel",
            "HouseNumber": "129",
            "HouseLetter": " ",
            "City": "Enschede",
            "ZipCode": "7514BP",
        })
    }

    fn envelope_json(data_list: serde_json::Value) -> String {
        json!({ "dataList": data_list, "status": true, "messageCode": 1 }).to_string()
    }

    #[tokio::test]
    async fn test_fetch_addresses() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/FetchAdress")
            .match_body(Matcher::PartialJson(json!({
                "companyCode": "test-company",
                "postCode": "7514BP",
                "houseNumber": "129",
                "houseLetter": NO_HOUSE_LETTER,
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(envelope_json(json!([address_json()])))
            .create_async()
            .await;
        let addresses = test_client(&server)
            .fetch_addresses("7514BP", "129", NO_HOUSE_LETTER)
            .await
            .unwrap();
        mock.assert_async().await;
        assert_eq!(addresses.len(), 1);
        assert_eq!(addresses[0].unique_id, "0000000001");
        assert_eq!(addresses[0].street, "Lasondersingel");
        assert_eq!(addresses[0].city, "Enschede");
    }

    #[tokio::test]
    async fn test_fetch_pickups() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/GetCalendar")
            .match_body(Matcher::PartialJson(json!({
                "companyCode": "test-company",
                "uniqueAddressID": "0000000001",
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(envelope_json(json!([{
                "pickupDates": ["2024-03-05T00:00:00", "2024-03-19T00:00:00Z"],
                "pickupType": 0,
                "_pickupType": 0,
                "_pickupTypeText": "GREY",
                "description": null,
            }])))
            .create_async()
            .await;
        let pickups = test_client(&server)
            .fetch_pickups(
                "0000000001",
                date("2024-03-01T00:00:00Z"),
                date("2025-03-01T00:00:00Z"),
            )
            .await
            .unwrap();
        mock.assert_async().await;
        assert_eq!(pickups.len(), 1);
        assert_eq!(pickups[0].category, "GREY");
        // naive timestamps are read as UTC, offset timestamps as given
        assert_eq!(
            pickups[0].pickup_dates,
            vec![date("2024-03-05T00:00:00Z"), date("2024-03-19T00:00:00Z")]
        );
    }

    #[tokio::test]
    async fn test_malformed_envelope() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/FetchAdress")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({ "unexpected": true }).to_string())
            .create_async()
            .await;
        let result = test_client(&server)
            .fetch_addresses("7514BP", "129", NO_HOUSE_LETTER)
            .await;
        assert!(matches!(result, Err(Error::InvalidEnvelope(_))));
    }

    #[tokio::test]
    async fn test_malformed_payload() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/FetchAdress")
            .with_status(200)
            .with_header("content-type", "application/json")
            // valid envelope, entry is missing every address field
            .with_body(envelope_json(json!([{ "UniqueId": 5 }])))
            .create_async()
            .await;
        let result = test_client(&server)
            .fetch_addresses("7514BP", "129", NO_HOUSE_LETTER)
            .await;
        assert!(matches!(
            result,
            Err(Error::InvalidPayload { kind: "address", .. })
        ));
    }

    #[tokio::test]
    async fn test_unparsable_pickup_date_is_a_payload_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/GetCalendar")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(envelope_json(json!([{
                "pickupDates": ["someday"],
                "_pickupTypeText": "GREY",
            }])))
            .create_async()
            .await;
        let result = test_client(&server)
            .fetch_pickups(
                "0000000001",
                date("2024-03-01T00:00:00Z"),
                date("2025-03-01T00:00:00Z"),
            )
            .await;
        assert!(matches!(
            result,
            Err(Error::InvalidPayload {
                kind: "pickup record",
                ..
            })
        ));
    }

    #[tokio::test]
    async fn test_http_failure_is_a_transport_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/FetchAdress")
            .with_status(500)
            .create_async()
            .await;
        let result = test_client(&server)
            .fetch_addresses("7514BP", "129", NO_HOUSE_LETTER)
            .await;
        assert!(matches!(result, Err(Error::Transport(_))));
    }
}

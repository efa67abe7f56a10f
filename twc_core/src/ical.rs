//! iCalendar document serialization.
//!
//! The emitted byte layout is part of the subscription contract: a single
//! malformed line breaks every subscribing calendar client, so the document
//! is written line by line with a fixed LF terminator instead of going
//! through a generator crate with its own ordering and folding rules.

use chrono::{DateTime, Utc};

static CALENDAR_NAME: &str = "Afvalkalender Twentemilieu";
static TIMEZONE: &str = "Europe/Amsterdam";
static CALENDAR_DESCRIPTION: &str = "Kalender feed voor de afvalinzameling";
static DATE_TIME_FORMAT: &str = "%Y%m%dT%H%M%SZ";

static DOCUMENT_FOOTER: &str = "END:VCALENDAR";

/// A single entry of the generated feed.
///
/// `end_date` must lie after `start_date`; the serializer does not check
/// this, the mapper guarantees it.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEvent {
    pub uid: String,
    pub creation_date: DateTime<Utc>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub summary: String,
}

/// Serialize the events into a complete VCALENDAR document.
///
/// The `feed_id` is embedded in the product-id header line. An empty event
/// list produces a valid header-and-footer-only document.
pub fn build_document(feed_id: &str, events: &[CalendarEvent]) -> String {
    let mut document = document_header(feed_id);
    for event in events {
        document.push_str(&event_block(event));
    }
    document.push_str(DOCUMENT_FOOTER);
    document
}

fn document_header(feed_id: &str) -> String {
    format!(
        "BEGIN:VCALENDAR\n\
         VERSION:2.0\n\
         PRODID:-//{feed_id}//NONSGML v1.0//EN\n\
         X-WR-CALNAME:{CALENDAR_NAME}\n\
         X-WR-TIMEZONE:{TIMEZONE}\n\
         X-WR-CALDESC:{CALENDAR_DESCRIPTION}\n"
    )
}

// The summary is emitted verbatim: labels come from the closed table in
// `waste` and contain none of the characters RFC 5545 requires escaping.
// User-supplied summaries would need an escaping pass first.
fn event_block(event: &CalendarEvent) -> String {
    format!(
        "BEGIN:VEVENT\n\
         UID:{}\n\
         DTSTAMP:{}\n\
         DTSTART;VALUE=DATE:{}\n\
         DTEND;VALUE=DATE:{}\n\
         SUMMARY:{}\n\
         TRANSP:TRANSPARENT\n\
         END:VEVENT\n",
        event.uid,
        format_date_time(&event.creation_date),
        format_date_time(&event.start_date),
        format_date_time(&event.end_date),
        event.summary,
    )
}

/// Render a timestamp as `YYYYMMDDThhmmssZ` from its UTC fields, with
/// zero-padded components and sub-second precision truncated.
fn format_date_time(date: &DateTime<Utc>) -> String {
    date.format(DATE_TIME_FORMAT).to_string()
}

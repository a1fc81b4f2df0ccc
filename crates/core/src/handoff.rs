//! Messaging handoff formatter.
//!
//! Builds the human-readable summary sent to the operator channel and the
//! deep link that opens a pre-filled chat. Sections appear in a fixed
//! order: trip type, model, passengers, bags, pickup (+ map link), dropoff
//! (+ map link), name, phone.

use url::Url;

use crate::booking::{BookingDraft, Location};
use crate::error::CoreError;

/// Default messaging host for the deep link.
pub const DEFAULT_MESSAGING_HOST: &str = "wa.me";

/// Google Maps search endpoint used for address map links.
const MAPS_SEARCH_URL: &str = "https://www.google.com/maps/search/";

/// Build a map link for a location, or `None` when the address is empty.
///
/// Coordinates take precedence when geocoding supplied them; otherwise the
/// address itself is used as the search query.
pub fn map_link(location: &Location) -> Option<String> {
    if location.address.trim().is_empty() {
        return None;
    }
    if let Some(coords) = location.coordinates {
        return Some(format!(
            "https://maps.google.com/?q={},{}",
            coords.lat, coords.lon
        ));
    }
    let mut url = Url::parse(MAPS_SEARCH_URL).expect("maps base url must parse");
    url.query_pairs_mut()
        .append_pair("api", "1")
        .append_pair("query", location.address.trim());
    Some(url.to_string())
}

/// Build the multi-line booking summary in the app's Arabic copy.
pub fn summary(draft: &BookingDraft, car_type_label: &str, car_model_label: &str) -> String {
    let mut lines: Vec<String> = Vec::new();
    lines.push("🚗 طلب حجز جديد".to_string());
    lines.push(String::new());
    lines.push(format!("نوع الرحلة: {car_type_label}"));
    lines.push(format!("الموديل: {car_model_label}"));
    lines.push(format!("عدد الركاب: {}", draft.passengers));
    lines.push(format!("عدد الحقائب: {}", draft.bags));
    lines.push(format!("مكان الانطلاق: {}", draft.pickup.address));
    if let Some(link) = map_link(&draft.pickup) {
        lines.push(format!("الموقع على الخريطة: {link}"));
    }
    lines.push(format!("الوجهة: {}", draft.dropoff.address));
    if let Some(link) = map_link(&draft.dropoff) {
        lines.push(format!("الموقع على الخريطة: {link}"));
    }
    lines.push(format!("الاسم: {}", draft.first_name));
    lines.push(format!("رقم الهاتف: {}", draft.phone_number));
    lines.join("\n")
}

/// Build the messaging deep link
/// `https://<host>/<destination>?text=<percent-encoded summary>`.
pub fn deep_link(host: &str, destination: &str, summary: &str) -> Result<String, CoreError> {
    let base = format!("https://{}/{}", host.trim_matches('/'), destination.trim_matches('/'));
    let mut url = Url::parse(&base).map_err(|e| {
        CoreError::Validation(format!("Invalid messaging destination '{host}/{destination}': {e}"))
    })?;
    url.query_pairs_mut().append_pair("text", summary);
    Ok(url.to_string())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Flattened enquiry fields for the email template.

use chrono::{DateTime, FixedOffset, Offset, SecondsFormat, Utc};
use invite_commerce::enquiry::EnquiryPayload;
use invite_commerce::money::Money;
use serde::{Deserialize, Serialize};

/// Offset used for the human-readable time: India Standard Time.
pub const DEFAULT_UTC_OFFSET_MINUTES: i32 = 330;

/// `cart_details` text for an enquiry without items.
pub const NO_ITEMS: &str = "No items found in cart";

/// The named fields the email template interpolates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateParams {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    /// One `name (Qty: n)` entry per item, joined with `<br>`.
    pub cart_details: String,
    /// Subtotal, sent as a number.
    pub total: Money,
    /// Enquiry time in RFC 3339 with milliseconds, UTC.
    pub date: String,
    /// Enquiry time as `hh:mm am`, at the configured offset.
    pub time: String,
    pub comments: String,
}

impl TemplateParams {
    /// Flatten a payload. `utc_offset_minutes` selects the clock the `time`
    /// field is written in.
    pub fn from_payload(payload: &EnquiryPayload, utc_offset_minutes: i32) -> Self {
        let cart_details = if payload.items.is_empty() {
            NO_ITEMS.to_string()
        } else {
            payload
                .items
                .iter()
                .map(|item| format!("{} (Qty: {})", item.name, item.quantity))
                .collect::<Vec<_>>()
                .join("<br>")
        };

        Self {
            customer_name: payload.customer.name.clone(),
            customer_email: payload.customer.email.clone(),
            customer_phone: payload.customer.phone.clone(),
            cart_details,
            total: payload.total,
            date: format_date(payload.enquiry_date),
            time: format_time(payload.enquiry_date, utc_offset_minutes),
            comments: payload.comments.clone(),
        }
    }
}

fn format_date(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn format_time(at: DateTime<Utc>, utc_offset_minutes: i32) -> String {
    // Out-of-range offsets (beyond a day) fall back to UTC.
    let offset = utc_offset_minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .unwrap_or_else(|| Utc.fix());
    at.with_timezone(&offset).format("%I:%M %P").to_string()
}

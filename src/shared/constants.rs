// =============================================================================
// STATUS ENVELOPE MESSAGES
// =============================================================================

/// Confirmation returned once the row has been appended
pub const RSVP_SUCCESS_MESSAGE: &str =
    "RSVP received successfully! We look forward to celebrating with you!";

/// Generic envelope returned for any parse or append fault
pub const RSVP_ERROR_MESSAGE: &str =
    "An error occurred. Please try again or contact us directly.";

/// Plain-text reply for the GET liveness probe
pub const LIVENESS_MESSAGE: &str =
    "✓ Wedding RSVP service is working! Your form submissions will be recorded.";

// =============================================================================
// RECORD FALLBACKS
// =============================================================================

/// Stored when the guest leaves the phone field blank
pub const PHONE_FALLBACK: &str = "Not provided";

/// Stored when the guest leaves the dietary field blank
pub const DIETARY_FALLBACK: &str = "None";

/// Stored when the guest leaves the message field blank
pub const MESSAGE_FALLBACK: &str = "No message";

/// Separator used when joining selected event names
pub const EVENT_SEPARATOR: &str = ", ";

// =============================================================================
// WEDDING DETAILS
// =============================================================================

/// Used in the guest confirmation subject line
pub const COUPLE_NAMES: &str = "Kartik & Palak";

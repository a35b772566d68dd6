use tracing::warn;

use crate::logging::pii::Redacted;
use crate::trace_ctx;

/// A presented session token failed verification.
pub fn session_rejected(reason: &str, path: &str) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_SESSION_REJECTED",
        %trace_id,
        reason,
        path,
        "Session token rejected"
    );
}

/// A verified user requested a page reserved for another role.
pub fn role_mismatch(email: &str, role: &str, required: &str, path: &str) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_ROLE_MISMATCH",
        %trace_id,
        email = %Redacted(email),
        role,
        required,
        path,
        "Role does not match page"
    );
}

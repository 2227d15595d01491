pub mod context;
pub mod guard;
pub mod storage;

/// Hardcoded admin credentials, compared by exact string equality on the
/// login form. This gate deters casual navigation only; it is not
/// authentication.
pub const ADMIN_USERNAME: &str = "billingtpkkoja";
pub const ADMIN_PASSWORD: &str = "billing2025";

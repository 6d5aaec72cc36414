/// Decimal places kept for amounts returned to clients.
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Number of months (including the current one) in the dashboard summary.
pub const MONTHLY_SUMMARY_MONTHS: u32 = 6;

/// Number of days (including today) in the dashboard spending trend.
pub const DAILY_SPENDING_DAYS: u32 = 30;

/// Minimum accepted password length.
pub const MIN_PASSWORD_LENGTH: usize = 6;

pub const DEFAULT_CURRENCY: &str = "USD";
pub const DEFAULT_TIMEZONE: &str = "UTC";
pub const DEFAULT_CATEGORY_COLOR: &str = "#3B82F6";

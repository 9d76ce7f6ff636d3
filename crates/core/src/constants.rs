/// Currency every trade is converted into unless configured otherwise
pub const DEFAULT_HOME_CURRENCY: &str = "SGD";

/// Pivot of the default rate table
pub const DEFAULT_PIVOT_CURRENCY: &str = "USD";

/// Currencies offered when logging a trade
pub const SUPPORTED_CURRENCIES: &[&str] = &["USD", "SGD", "EUR", "GBP", "JPY", "MYR"];

/// Currencies shown on the live rates ticker, in display order
pub const TICKER_CURRENCIES: &[&str] = &["SGD", "EUR", "GBP", "JPY", "MYR"];

/// Decimal places kept on converted amounts and totals
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Decimal places shown on the rates ticker
pub const TICKER_DECIMAL_PRECISION: u32 = 3;

/// Store key holding the serialized trade collection
pub const TRADES_STORE_KEY: &str = "tj_v2_data";

/// Store key holding the theme preference
pub const THEME_STORE_KEY: &str = "theme";

//! Element ids the page exposes. Kept stable for external scripts and styling.

pub const BOT_STATUS: &str = "botStatus";
pub const STATUS_TEXT: &str = "statusText";
pub const START_BTN: &str = "startBtn";
pub const STOP_BTN: &str = "stopBtn";
pub const TEST_BOT_BTN: &str = "testBotBtn";
pub const TEST_TELEGRAM_BTN: &str = "testTelegramBtn";
pub const REFRESH_BTN: &str = "refreshBtn";
pub const SEARCH_INPUT: &str = "searchInput";
pub const SORT_SELECT: &str = "sortSelect";
pub const TOTAL_SYMBOLS: &str = "totalSymbols";
pub const SIGNALS_COUNT: &str = "signalsCount";
pub const ALERT_COUNT: &str = "alertCount";
pub const ACTIVE_POSITIONS: &str = "activePositions";
pub const COINS_GRID: &str = "coinsGrid";
pub const POSITIONS_LIST: &str = "positionsList";
pub const SIGNALS_LIST: &str = "signalsList";
pub const TRADING_STATS: &str = "tradingStats";
pub const NOTIFICATION: &str = "notification";

// src/config/consts.rs

// Target
pub const FORECAST_URL: &str =
    "https://www.climatempo.com.br/previsao-do-tempo/cidade/438/embudasartes-sp";
pub const CITY: &str = "Embu das Artes";

// Browser
pub const READY_TIMEOUT_SECS: u64 = 15;
pub const SETTLE_DELAY_SECS: u64 = 5;
// Replaces the driver's default switch list, which includes --enable-automation.
pub const BROWSER_ARGS: &[&str] = &[
    "--disable-background-networking",
    "--disable-background-timer-throttling",
    "--disable-backgrounding-occluded-windows",
    "--disable-breakpad",
    "--disable-client-side-phishing-detection",
    "--disable-component-extensions-with-background-pages",
    "--disable-default-apps",
    "--disable-dev-shm-usage",
    "--disable-extensions",
    "--disable-features=TranslateUI",
    "--disable-hang-monitor",
    "--disable-ipc-flooding-protection",
    "--disable-popup-blocking",
    "--disable-prompt-on-repost",
    "--disable-renderer-backgrounding",
    "--disable-sync",
    "--metrics-recording-only",
    "--no-first-run",
    "--password-store=basic",
    "--use-mock-keychain",
    "--disable-blink-features=AutomationControlled",
];
pub const HIDE_WEBDRIVER_JS: &str =
    "Object.defineProperty(navigator, 'webdriver', {get: () => undefined})";

// Extraction (first match wins, in this order)
pub const TEMPERATURE_SELECTORS: &[&str] = &[
    "span[class*='temp']",
    ".temperature",
    "[data-testid*='temperature']",
    "span:contains('°')",
    ".temp-max",
    ".temp-min",
];
pub const HUMIDITY_SELECTORS: &[&str] = &[
    "span:contains('%')",
    ".humidity",
    "[data-testid*='humidity']",
    "span[class*='umidade']",
    "span[class*='humidity']",
];

// Simulated fallback (typical winter values for the city)
pub const SIM_TEMPERATURE_MIN: i32 = 15;
pub const SIM_TEMPERATURE_MAX: i32 = 25;
pub const SIM_HUMIDITY_MIN: i32 = 60;
pub const SIM_HUMIDITY_MAX: i32 = 85;

// Spreadsheet
pub const DOCUMENTS_FALLBACK: &str = "Documents";
pub const SHEET_FILE: &str = "previsao_tempo_embu.xlsx";
pub const SHEET_NAME: &str = "Sheet1";
pub const COLUMNS: [&str; 4] = ["Data_Hora", "Temperatura", "Umidade", "Cidade"];
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";
pub const NA: &str = "N/A";

// Local store (debug log)
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Window
pub const WINDOW_TITLE: &str = "Previsão do tempo de Embu das Artes";
pub const WINDOW_W: f32 = 400.0;
pub const WINDOW_H: f32 = 200.0;

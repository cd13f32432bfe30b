use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    // --- Server Args ---
    /// Bind address for the chat WebSocket server
    #[arg(long, env = "SERVER_ADDR", default_value = "127.0.0.1:4000")]
    pub server_addr: String,

    /// Port for the HTTP API the pages call (contact, search, theme, reload)
    #[arg(long, env = "HTTP_PORT", default_value = "8080")]
    pub http_port: u16,

    // --- Content Args ---
    /// Path to the chat response tables (greeting, canned replies, keyword rules)
    #[arg(long, env = "RESPONSES_PATH", default_value = "json/responses.json")]
    pub responses_path: String,

    /// Path to the site search index (records and suggested queries)
    #[arg(long, env = "SEARCH_INDEX_PATH", default_value = "json/search_index.json")]
    pub search_index_path: String,

    // --- Transcript Store Args ---
    /// Chat transcript store type (memory)
    #[arg(long, env = "TRANSCRIPT_TYPE", default_value = "memory")]
    pub transcript_type: String,

    /// Maximum number of messages returned per conversation transcript
    #[arg(long, env = "TRANSCRIPT_LIMIT", default_value = "50")]
    pub transcript_limit: usize,

    // --- Contact Delivery Args ---
    /// Base URL of the transactional mail API
    #[arg(long, env = "MAIL_BASE_URL", default_value = "https://api.emailjs.com")]
    pub mail_base_url: String,

    /// Mail service identifier
    #[arg(long, env = "MAIL_SERVICE_ID", default_value = "")]
    pub mail_service_id: String,

    /// Mail template identifier
    #[arg(long, env = "MAIL_TEMPLATE_ID", default_value = "")]
    pub mail_template_id: String,

    /// Public key sent as the mail API user id
    #[arg(long, env = "MAIL_PUBLIC_KEY", default_value = "")]
    pub mail_public_key: String,

    /// Spreadsheet webhook URL for the submission mirror. Mirroring is
    /// disabled when unset.
    #[arg(long, env = "SHEET_WEBHOOK_URL")]
    pub sheet_webhook_url: Option<String>,

    // --- Chat Pacing Args ---
    /// Milliseconds before the typing indicator appears
    #[arg(long, env = "TYPING_DELAY_MS", default_value = "500")]
    pub typing_delay_ms: u64,

    /// Milliseconds from receipt of a message to its reply
    #[arg(long, env = "RESPONSE_DELAY_MS", default_value = "1500")]
    pub response_delay_ms: u64,

    // --- Preference Args ---
    /// Path to the persisted visitor preferences (theme)
    #[arg(long, env = "PREFS_PATH", default_value = "prefs.json")]
    pub prefs_path: String,

    // --- TLS Args ---
    /// Enable TLS for the HTTP and WebSocket servers
    #[arg(long, env = "ENABLE_TLS", default_value = "false")]
    pub enable_tls: bool,

    /// Path to the PEM certificate chain
    #[arg(long, env = "TLS_CERT_PATH")]
    pub tls_cert_path: Option<String>,

    /// Path to the PKCS8 private key
    #[arg(long, env = "TLS_KEY_PATH")]
    pub tls_key_path: Option<String>,

    // --- Logging Args ---
    /// Log at debug level instead of info
    #[arg(long, env = "DEBUG", default_value = "false")]
    pub debug: bool,
}

pub mod api {
    use std::time::Duration;
    pub const INTERVAL: Duration = Duration::from_millis(500);
    pub const ATTEMPTS: u32 = 10;
    pub const PAGE_SIZE: u32 = 10;
    pub const BASE_URL: &str = "https://codeforces.com/api";
}
pub mod page {
    use std::time::Duration;
    pub const INTERVAL: Duration = Duration::from_millis(1000);
    pub const VARIABLE_TIMEOUT: bool = true;
    pub const ATTEMPTS: u32 = 5;
    pub const BASE_URL: &str = "https://codeforces.com";
}
pub mod throttle {
    // Every COOLDOWN_LONG-th call waits interval * COOLDOWN_LONG, every
    // COOLDOWN_SHORT-th call interval * COOLDOWN_SHORT.
    pub const COOLDOWN_SHORT: u32 = 5;
    pub const COOLDOWN_LONG: u32 = 10;
    pub const JITTER: f64 = 0.5;
}
pub mod statement {
    pub const FILE_NAME: &str = "statement.html";
    pub const CONTENT_DIR: &str = "statement.html_files";
}
pub mod session {
    pub const LANG: &str = "ru";
    pub const FIREFOX_UA: &str =
        "Mozilla/5.0 (X11; Linux x86_64; rv:78.0) Gecko/20100101 Firefox/78.0";
}

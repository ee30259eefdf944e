use super::Config;

pub const SEARCH_URL: &str = "https://genius.com/search";
pub const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.114 Safari/537.36";
pub const TIMEOUT_SECS: u64 = 5;

pub const SONG_LINK_SELECTOR: &str = "a[class^='CardSongdesktop__Link']";
pub const LYRICS_CONTAINER_SELECTOR: &str = "div[data-lyrics-container='true']";

pub fn defaults() -> Config {
    Config::default()
}

pub const SEARCH_APP_NAME: &str = "WikiPreview";
pub const WIKI_SEARCH_TAG_NAME: &str = "Wiki";
pub const TAG_DESCRIPTION: &str = "Search in Wikipedia";
pub const SEARCH_RESULT_ICON: &str = "\u{EDE4}";
pub const MINIMUM_SEARCH_LENGTH: usize = 2;

pub const USER_AGENT: &str = concat!("wiki-preview/", env!("CARGO_PKG_VERSION"));

pub const WIKI_API_URL: &str = "https://en.wikipedia.org/w/api.php";
pub const WIKI_ROOT_URL: &str = "https://en.wikipedia.org/wiki/";
pub const WIKIWAND_URL: &str = "https://www.wikiwand.com/en/";
pub const GOOGLE_SEARCH_URL: &str = "https://www.google.com/search?q=";
pub const WIKIPEDIA_HOST_SUFFIX: &str = "wikipedia.org";

pub const MISSING_DESCRIPTION: &str = "Description not available for this Search Result.";

pub const DEFAULT_MAX_RESULTS: u32 = 8;
pub const MIN_MAX_RESULTS: u32 = 1;
pub const MAX_MAX_RESULTS: u32 = 30;
pub const DEFAULT_IMAGE_SIZE: u32 = 100;
pub const MIN_IMAGE_SIZE: u32 = 16;
pub const MAX_IMAGE_SIZE: u32 = 512;
pub const DEFAULT_WIKI_NAMESPACE: i32 = 0;
pub const DEFAULT_LOAD_IMAGES: bool = true;

pub const CONFIG_DIR_NAME: &str = "wiki-preview";
pub const SETTINGS_FILE_NAME: &str = "settings.json";

pub const PREVIEW_NAME: &str = "Wikipedia Preview";
pub const PREVIEW_DESCRIPTION: &str =
    "Displays the Wikipedia Article Information within the launcher.";
pub const PREVIEW_BUTTON_WIKIPEDIA: &str = "Wikipedia";
pub const PREVIEW_BUTTON_GOOGLE: &str = "Search Google";
pub const PREVIEW_BUTTON_COPY: &str = "Copy Text";

pub const PLACEHOLDER_LOGO_PNG: &[u8] = include_bytes!("../assets/wikipedia-logo.png");

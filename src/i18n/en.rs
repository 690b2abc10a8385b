pub const BTN_PREV: &str = "Previous";
pub const BTN_NEXT: &str = "Next";
pub const TEXT_LOADINGIMG: &str = "Loading image...";
pub const TEXT_IMAGE_ERROR: &str = "This artwork could not be displayed";
pub const TEXT_KEYS_HINT: &str = "Use the arrow keys or Space to browse";

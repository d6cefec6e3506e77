pub mod constants;
pub mod html_text;
pub mod string_utils;
pub mod url_utils;

pub use constants::*;
pub use html_text::{strip_anchor_tags, strip_tags, word_count};
pub use url_utils::{decoded_path, is_valid_url};

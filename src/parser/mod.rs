pub mod block;
pub mod heading;
pub mod index;
pub mod normalize;

pub use block::{extract_block, extract_block_text, split_blocks};
pub use heading::{
    is_version_token, normalize_version_query, parse_heading_line, scan_headings,
    strip_version_prefix,
};
pub use index::list_versions;
pub use normalize::normalize_content;

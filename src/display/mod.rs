//! Display formatting for rendered pages.
//!
//! | Module | Purpose                                   |
//! |--------|-------------------------------------------|
//! | `date` | ISO timestamps to comment-thread dates    |
//! | `link` | Like-API paths, mount-safe hrefs          |

pub mod date;
pub mod link;

pub use date::{DateTimeUtc, INVALID_DATE, format_comment_date};
pub use link::{PLACEHOLDER_HREF, build_like_api_url, create_safe_href, should_prevent_default};

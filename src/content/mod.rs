//! Portfolio content: articles, project status, social links.
//!
//! | Module    | Purpose                                         |
//! |-----------|-------------------------------------------------|
//! | `article` | Frontmatter parsing and per-article summaries   |
//! | `scan`    | Article discovery and parallel summarization    |
//! | `social`  | Profile URL classification                      |
//! | `status`  | Human status labels to normalized tokens        |

pub mod article;
pub mod scan;
pub mod social;
pub mod status;

pub use article::{ArticleMeta, ArticleSummary, summarize};
pub use scan::{ScanReport, collect_articles, scan_articles};
pub use social::{SocialLink, SocialPlatform, extract_social_links};
pub use status::{ProjectStatus, map_status};

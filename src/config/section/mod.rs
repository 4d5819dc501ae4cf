//! Configuration section definitions.
//!
//! Each module corresponds to a section in `folio.toml`:
//!
//! | Module    | TOML Section | Purpose                          |
//! |-----------|--------------|----------------------------------|
//! | `content` | `[content]`  | Article directory, draft policy  |
//! | `reading` | `[reading]`  | Reading-time rate                |

mod content;
mod reading;

pub use content::ContentConfig;
pub use reading::ReadingConfig;

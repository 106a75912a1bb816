//! Configuration section definitions.
//!
//! Each module corresponds to a section in `blog.toml`:
//!
//! | Module    | TOML Section   | Purpose                                  |
//! |-----------|----------------|------------------------------------------|
//! | `site`    | `[site]`       | Author, title, URL, timezone, language   |
//! | `content` | `[content]`    | Content root, pagination, excludes       |
//! | `feed`    | `[feed]`       | Syndication feed outputs                 |
//! | `social`  | `[social]`     | Social link icons                        |
//! | `theme`   | `[theme]`      | Theme directory and overrides            |
//! | `assets`  | `[assets]`     | Static paths and per-file output paths   |

pub mod assets;
mod content;
mod feed;
mod site;
mod social;
mod theme;

pub use assets::{AssetsConfig, PathMetadata};
pub use content::{ContentConfig, DEFAULT_PAGINATION};
pub use feed::FeedConfig;
pub use site::SiteInfoConfig;
pub use social::{IconEntry, SocialConfig};
pub use theme::ThemeConfig;

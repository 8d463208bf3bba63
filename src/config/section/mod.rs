//! Configuration section definitions.
//!
//! One module per top-level section of the declaration:
//!
//! | Section     | Purpose                                        |
//! |-------------|------------------------------------------------|
//! | `[site]`    | Site metadata (title, description, base, url)  |
//! | `[[nav]]`   | Top navigation bar entries                     |
//! | `[sidebar]` | Path-scoped sidebar groups                     |
//! | `[[social]]`| External social links                          |

mod nav;
mod sidebar;
mod site;
mod social;

pub use nav::{NavEntry, NavLink, NavNode};
pub use sidebar::{SidebarConfig, SidebarGroup, SidebarScope};
pub use site::SiteInfoConfig;
pub use social::{SocialIcon, SocialLink};

//! Configuration module

mod site;

pub use site::BlogCard;
pub use site::HighlightConfig;
pub use site::HomeConfig;
pub use site::NavigationConfig;
pub use site::PostOrder;
pub use site::Project;
pub use site::ServerConfig;
pub use site::SiteConfig;
pub use site::Skill;

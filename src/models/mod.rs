pub mod category;
pub mod dependency;
pub mod download;
pub mod keyword;
pub mod krate;
pub mod owner;
pub mod team;
pub mod user;
pub mod version;

pub use self::category::Category;
pub use self::dependency::{Dependency, DependencyKind};
pub use self::download::VersionDownload;
pub use self::keyword::Keyword;
pub use self::krate::Crate;
pub use self::owner::CrateOwnership;
pub use self::team::Team;
pub use self::user::User;
pub use self::version::Version;

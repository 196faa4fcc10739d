mod common;
pub(crate) use self::common::pairs;
pub use self::common::{merge, Params, Query};

mod assets;
pub use self::assets::AssetsQuery;

mod collections;
pub use self::collections::CollectionsQuery;

mod events;
pub use self::events::EventsQuery;

mod mintings;
pub use self::mintings::OpenMintingsQuery;

mod orders;
pub use self::orders::OrderQuery;

mod series;
pub use self::series::SeriesQuery;

mod statistics;
pub use self::statistics::StatisticsQuery;

mod token;
pub use self::token::TokenQuery;

mod users;
pub use self::users::UsersQuery;

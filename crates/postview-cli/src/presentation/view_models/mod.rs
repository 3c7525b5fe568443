pub mod common;
pub mod config;
pub mod post;
pub mod result;
pub mod screen;

pub use common::{Guidance, StatusBadge, StatusLevel};
pub use config::{ConfigInitViewModel, ConfigViewModel};
pub use post::{PostDetailViewModel, PostListViewModel, PostSummaryViewModel};
pub use result::CommandResultViewModel;
pub use screen::{ListItemViewModel, ScreenBody, ScreenViewModel, StatusLineViewModel};

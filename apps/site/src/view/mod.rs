// Server-side rendering of the profile page.
// Pure: (Profile, DisplayMode, year) -> HTML. No client bundle is produced.

pub mod mode;
pub mod page;
pub mod primitives;

pub use mode::DisplayMode;
pub use page::{current_year, SitePage};

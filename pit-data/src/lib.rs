pub mod month_loader;

pub use month_loader::{MonthLoadError, load_from_file, load_from_reader, load_from_str};

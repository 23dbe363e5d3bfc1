//! Directory reorganizer.
//!
//! Groups the files of a folder into `images`, `video`, `documents`, `audio`,
//! `archives` and `others` sub-folders by extension.

pub mod file_sorter;

pub use file_sorter::{FileCategory, FileSorter, SortReport};

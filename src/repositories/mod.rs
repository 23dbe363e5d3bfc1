mod contact_book;
mod note_book;
pub mod store;
mod traits;

pub use contact_book::{ContactBook, DuplicatePolicy, UpcomingBirthday};
pub use note_book::NoteBook;
pub use traits::PersistentRepository;

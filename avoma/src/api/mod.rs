//! Resource APIs, one per endpoint family. Obtain them from [`crate::AvomaClient`].

mod calls;
mod meetings;
mod notes;
mod recordings;
mod sentiments;
mod smart_categories;
mod templates;
mod transcriptions;
mod users;

pub use calls::Calls;
pub use meetings::Meetings;
pub use notes::Notes;
pub use recordings::Recordings;
pub use sentiments::Sentiments;
pub use smart_categories::SmartCategories;
pub use templates::Templates;
pub use transcriptions::Transcriptions;
pub use users::Users;

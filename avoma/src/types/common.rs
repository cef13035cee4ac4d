use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Largest `page_size` accepted by every paginated endpoint except meetings.
pub const MAX_PAGE_SIZE: u32 = 20;

/// A labelled lookup value such as a meeting's type, purpose or outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingAttribute {
    pub label: String,
    pub uuid: Uuid,
}

pub mod binding;
pub mod fields;
pub mod requests;

pub use binding::ColumnBinding;
pub use fields::{TargetField, TicketVariant};
pub use requests::{StoryRequest, SubTaskRequest};

pub mod correlate;
pub mod lead;
pub mod work_item;

pub use lead::{Lead, LeadPatch, LeadStatus, NewLead};
pub use work_item::{WorkItem, WorkItemStatus};

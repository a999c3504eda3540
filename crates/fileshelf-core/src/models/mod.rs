mod fetch;
mod record;
mod view;

pub use fetch::{FetchOutcome, decode_record_array};
pub use record::{FileRecord, RecordOwner};
pub use view::{PageView, RecordRow};

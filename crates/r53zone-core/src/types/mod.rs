mod diagnostic;
mod document;
mod lenient;
mod record;
mod zone;

pub use diagnostic::*;
pub use document::*;
pub use record::*;
pub use zone::*;

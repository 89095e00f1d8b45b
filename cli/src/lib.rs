pub mod display;
pub mod loader;
pub mod session;

pub use display::{display_ranked_documents, DisplayOptions, QueryHit, QueryResponse};
pub use loader::load_documents;
pub use session::run_interactive;

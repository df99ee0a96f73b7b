pub mod document;
pub mod schema;

pub use document::{Benches, Document, Kanban, Layout};
pub use schema::{default_document, BENCHES, BENCH_SENTINEL, KANBAN_COLUMNS, STATE_KEY, STORE_NAMESPACE};

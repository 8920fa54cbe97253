pub mod extractor;
pub mod handlers;
pub mod middleware;
pub mod session;

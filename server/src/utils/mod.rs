pub mod clock;
pub mod error;
pub mod extract;
pub mod logger;
pub mod pagination;
pub mod response;

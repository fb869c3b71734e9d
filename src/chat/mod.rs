pub mod router;

pub use router::{ChatContext, respond};

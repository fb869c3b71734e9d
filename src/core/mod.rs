pub mod backup;
pub mod log;
pub mod publish;
pub mod stanza;

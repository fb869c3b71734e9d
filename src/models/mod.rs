pub mod day_group;
pub mod session;
pub mod stanza;

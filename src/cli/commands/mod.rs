pub mod backup;
pub mod chat;
pub mod config;
pub mod db;
pub mod done;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod publish;
pub mod save;
pub mod show;
pub mod stats;
pub mod tags;
pub mod thoughts;
pub mod zen;

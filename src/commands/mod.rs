//! Command implementations for facnet

pub mod all_pairs;
pub mod bfs;
pub mod cycle;
pub mod dispatch;
pub mod export;
pub mod facility;
pub mod format;
pub mod init;
pub mod link;
pub mod mst;
pub mod path;
pub mod route;

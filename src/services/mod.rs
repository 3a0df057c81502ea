// Service module exports
// Layout engine, view composition, drag interaction and the data they work on

pub mod composer;
pub mod interaction;
pub mod layout;
pub mod schedule;
pub mod seed;
pub mod settings;

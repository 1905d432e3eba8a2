pub mod push_recent;

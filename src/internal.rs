pub mod entrance;
pub mod history;
pub mod media;
pub mod states;
pub mod transfer;

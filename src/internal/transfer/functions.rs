pub mod assemble;
pub mod deliver;
pub mod track_progress;

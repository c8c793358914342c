pub mod playlist;
pub mod state;

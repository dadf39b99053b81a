pub mod club;

pub use club::{Club, ClubChanges, NewClub};

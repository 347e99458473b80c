pub mod d100_admin;
pub mod d200_vendor;
pub mod d300_master;
pub mod overview;

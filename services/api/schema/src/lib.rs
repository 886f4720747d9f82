//! sea-orm entities for the Gavel API database.

pub mod auctions;
pub mod users;

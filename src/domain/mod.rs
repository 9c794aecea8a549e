pub mod categories;
pub mod contact;

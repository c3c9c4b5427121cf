pub mod group;
pub mod monoid;

pub mod dihedral;
pub mod free;
pub mod ward;

pub mod algebra;
pub mod axioms;
pub mod modular;
pub mod structures;

pub use algebra::group::{Exponent, Group, PowerError};
pub use algebra::monoid::{repeated_product, Monoid};
pub use modular::{bezout, crt, gcd, NoSolution};
pub use structures::dihedral::Dih;
pub use structures::free::{FreeGroup, Word};
pub use structures::ward::WardQuasigroup;

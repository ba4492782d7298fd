pub mod party;
pub mod visit;

pub use party::Party;
pub use visit::Visit;

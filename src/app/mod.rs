pub mod session;

pub use session::{SearchSession, SessionReport};

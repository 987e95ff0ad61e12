pub mod input;
pub mod pipeline;
pub mod renderer;
pub mod resolver;

pub use crate::domain::model::{ImageElement, ObjectId, ObjectRef, ResponsePolicy, SearchTerm};
pub use crate::domain::ports::{ConfigProvider, Container, MuseumApi, Storage};
pub use crate::utils::error::Result;

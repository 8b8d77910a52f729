pub mod movie;

pub use movie::{Movie, MovieDto};

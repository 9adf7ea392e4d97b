pub mod application;
pub mod domain;
pub mod ports;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use application::{TodoUsecase, TodoUsecaseImpl};
pub use domain::{Todo, TodoId};
pub use ports::{RepoError, Result, TodoPresenter, TodoRepository};

pub mod gallery;
pub mod modal;

pub use gallery::gallery_view;
pub use modal::{KeyCommand, ModalAction, ModalState};

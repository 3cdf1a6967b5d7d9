pub mod element;
pub mod page;

pub use element::Element;
pub use page::Page;

pub mod category;
pub mod faq;
pub mod session;

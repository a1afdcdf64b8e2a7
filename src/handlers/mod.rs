pub mod root;
pub mod hello;

pub use root::root_handler;
pub use hello::hello_handler;

pub mod dashboard;
pub mod login;
pub mod logout;

pub use dashboard::*;
pub use login::*;
pub use logout::*;

mod f_anonym;
mod f_cookie;
mod f_jwt;

pub use f_anonym::anonym;
pub use f_cookie::try_cookie;
pub use f_jwt::try_jwt;

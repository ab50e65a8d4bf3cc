pub mod cursor;
pub mod errors;
pub mod token;

pub use cursor::ByteCursor;
pub use errors::CodecError;
pub use token::Token;
pub use token::MAX_DIGEST_LEN;
pub use token::MAX_USERNAME_LEN;
pub use token::TOKEN_VERSION;

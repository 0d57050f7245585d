mod mock_digest;

pub use mock_digest::*;

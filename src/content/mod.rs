//! Static text shipped with the terminal: banners, command responses,
//! documentation and whitepaper front matter.

pub mod banner;
pub mod docs;
pub mod responses;
pub mod whitepaper;

pub use banner::{CLEAR_BANNER, CONTRACT_ADDRESS_PLACEHOLDER, PROMPT, TAGLINE, WELCOME_BANNER};

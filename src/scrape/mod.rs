mod client;
mod metadata;
mod response;
mod result;

pub use client::Client;
pub use metadata::{extract, PageMetadata};
pub use response::ProxyResponse;
pub use result::{Error, Result};

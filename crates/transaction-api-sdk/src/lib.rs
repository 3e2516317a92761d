//! Transaction API SDK - Types shared between the transaction handler and its tests
//!
//! The function host talks to a custom handler over loopback HTTP and expects
//! every invocation to answer with an [`InvokeResponse`] envelope. This crate
//! holds that envelope, the nested [`HttpResponse`] the host forwards to the
//! caller, and the fixed [`Greeting`] payload.

pub mod error;
pub mod greeting;
pub mod invoke;
pub mod request;
pub mod response;

pub mod prelude {
    //! Common imports for transaction handlers
    pub use crate::error::HandlerError;
    pub use crate::greeting::{format_timestamp, Greeting, SOFTWARE_VERSION, TIMESTAMP_FORMAT};
    pub use crate::invoke::{InvokeResponse, Outputs};
    pub use crate::request::{RequestInfo, INVOCATION_ID_HEADER};
    pub use crate::response::HttpResponse;
}

// Re-export key types at crate root
pub use error::HandlerError;
pub use greeting::Greeting;
pub use invoke::{InvokeResponse, Outputs};
pub use request::RequestInfo;
pub use response::HttpResponse;

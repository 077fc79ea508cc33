#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::dbg_macro,
        clippy::print_stdout,
        clippy::print_stderr,
        clippy::panic,
    )
)]

pub mod codes;
pub mod describe;
pub mod error;
pub mod firmware;
pub mod types;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use codes::LibrtasError;
pub use describe::{describe, describe_into, is_librtas_error};
pub use error::Error;
pub use firmware::CallStatus;
pub use types::{CodeEntry, catalog, catalog_json};

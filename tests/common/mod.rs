#![allow(unused_imports)]

pub use vula_bridge_test_utils::{builders, fakes, init_tracing, with_timeout};

#[cfg(unix)]
pub use vula_bridge_test_utils::stub;

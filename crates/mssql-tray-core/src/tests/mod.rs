#[cfg(unix)]
mod support;

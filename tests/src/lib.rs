//! End-to-end tests for the lookup engine, run against local stub servers.

#[cfg(test)]
mod util;

#[cfg(test)]
mod lookup {
    mod integration;
}

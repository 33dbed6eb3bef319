//! Helpers for running settings tests inside a `figment::Jail`.
//!
//! A jail gives each test its own working directory and environment, so
//! settings files and `LOAD_DECL_*` variables never leak between tests.

use anyhow::{Result, anyhow};

/// Runs `f` inside a [`figment::Jail`] and hands back its output.
///
/// # Errors
///
/// Returns an error if the jail cannot be created or `f` fails.
pub fn with_jail<F, T>(f: F) -> Result<T>
where
    F: FnOnce(&mut figment::Jail) -> figment::error::Result<T>,
{
    let mut output = None;
    figment::Jail::try_with(|jail| {
        output = Some(f(jail)?);
        Ok(())
    })
    .map_err(|err| anyhow!(err.to_string()))?;
    output.ok_or_else(|| anyhow!("jail closure did not return a value"))
}

/// Sets each `(suffix, value)` pair as a `LOAD_DECL_`-prefixed variable.
///
/// ```
/// use load_decl_test_helpers::figment::{set_prefixed_env, with_jail};
///
/// with_jail(|jail| {
///     set_prefixed_env(jail, &[("COMPACT", "true")]);
///     assert_eq!(std::env::var("LOAD_DECL_COMPACT").as_deref(), Ok("true"));
///     Ok(())
/// })
/// .unwrap();
/// ```
pub fn set_prefixed_env(jail: &mut figment::Jail, vars: &[(&str, &str)]) {
    for (suffix, value) in vars {
        jail.set_env(format!("LOAD_DECL_{suffix}"), value);
    }
}

/// Converts any displayable error into a [`figment::Error`] so it can be
/// returned from a jail closure.
#[expect(
    clippy::needless_pass_by_value,
    reason = "called from map_err, which hands over ownership"
)]
pub fn jail_error<E: ToString>(err: E) -> figment::Error {
    figment::Error::from(err.to_string())
}

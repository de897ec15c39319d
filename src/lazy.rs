//! Build-once access to a [`Demoji`].

use std::collections::HashMap;

use log::info;
use once_cell::sync::OnceCell;

use crate::{Config, Demoji, Result, Source};

/// A [`Demoji`] that is built on first use.
///
/// If multiple threads ask for it at the same time, only one of them builds
/// it while the others wait. Once built, access is lock-free. A failed build
/// is not remembered and will be attempted again on the next access.
#[derive(Debug)]
pub struct LazyDemoji {
    config: Config,
    cell: OnceCell<Demoji>,
}

impl LazyDemoji {
    /// Create an unbuilt holder. Nothing is loaded until [`Self::get`].
    pub const fn new(config: Config) -> Self {
        Self {
            config,
            cell: OnceCell::new(),
        }
    }

    /// The config the [`Demoji`] is built from.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Whether a build has succeeded yet.
    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }

    /// Get the [`Demoji`], building it if necessary.
    pub fn get(&self) -> Result<&Demoji> {
        self.cell.get_or_try_init(|| {
            let demoji = Demoji::new(&self.config)?;
            info!(
                "Built emoji matcher with {} sequences",
                demoji.matcher().len()
            );
            Ok(demoji)
        })
    }
}

static BUNDLED: LazyDemoji = LazyDemoji::new(Config {
    source: Source::Bundled,
    tolerant: true,
});

/// The process-wide [`Demoji`] built from the bundled data.
pub fn bundled() -> Result<&'static Demoji> {
    BUNDLED.get()
}

/// Find the distinct emoji in a text, mapped to their descriptions.
///
/// See [`Demoji::find_unique`].
pub fn findall(text: &str) -> Result<HashMap<&str, &'static str>> {
    Ok(bundled()?.find_unique(text))
}

/// Find every emoji occurrence in a text, in order.
///
/// See [`Demoji::find_all`].
pub fn findall_list(text: &str, descriptions: bool) -> Result<Vec<&str>> {
    Ok(bundled()?.find_all(text, descriptions))
}

/// Replace every emoji with `repl`.
///
/// See [`Demoji::strip`].
pub fn replace(text: &str, repl: &str) -> Result<String> {
    Ok(bundled()?.strip(text, repl))
}

/// Replace every emoji with its description surrounded by `sep`.
///
/// See [`Demoji::replace_with_description`].
pub fn replace_with_desc(text: &str, sep: &str) -> Result<String> {
    Ok(bundled()?.replace_with_description(text, sep))
}

use std::io;

use compio::time::sleep;
use snafu::Snafu;
use snafu::prelude::*;
use tracing::debug;

use crate::application::RuntimeConfig;
use crate::ignore_rules::{IgnoreMatcher, IgnoreRules, MatcherCreationError, RulesError};
use crate::watcher::{Driver, Reporter};

pub struct Application;

impl Application {
    /// Loads the ignore rules, then polls the tree until the process is
    /// terminated. Only startup failures and a broken stdout end it early.
    pub async fn run(app_config: impl Into<RuntimeConfig>) -> Result<(), ApplicationError> {
        let app_config: RuntimeConfig = app_config.into();
        debug!("Runtime config: {:?}", app_config);

        let rules = IgnoreRules::read(&app_config.ignore_file_path())
            .await
            .context(IgnoreRulesSnafu)?;
        if rules.is_empty() {
            debug!("No ignore rules, watching every path");
        } else {
            debug!("Loaded {} ignore rules", rules.len());
        }
        let matcher = IgnoreMatcher::new(&rules).context(MatcherSnafu)?;

        let colored = app_config.color.enabled();
        colored::control::set_override(colored);
        let mut reporter = Reporter::new(io::stdout(), colored);
        let mut driver = Driver::new(app_config.root.clone(), matcher);

        loop {
            let tick = driver.poll_once(&mut reporter).context(ReportSnafu)?;
            debug!("Tick finished: {:?}", tick);
            sleep(app_config.interval).await;
        }
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Critical failure encountered while reading the ignore rules"))]
    IgnoreRulesError { source: RulesError },
    #[snafu(display("Critical failure encountered while building the ignore matcher"))]
    MatcherError { source: MatcherCreationError },
    #[snafu(display("Failed to write the change report"))]
    ReportError { source: io::Error },
}

use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;

use crate::application::data::LogLevel;

/// Compact subscriber for diagnostics at `level`, or `None` when silent.
///
/// The binary hands it stderr: stdout is reserved for the change report, so
/// piping the report elsewhere never mixes log lines into it.
pub fn diagnostics_subscriber<W>(
    level: LogLevel,
    writer: W,
) -> Option<impl Subscriber + Send + Sync + 'static>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let level = level.to_tracing_level()?;
    Some(
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(writer)
            .without_time()
            .compact()
            .finish(),
    )
}

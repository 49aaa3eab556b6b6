use std::future::Future;
use std::path::PathBuf;

use anyhow::Context;
use fuzzer_core::{parse_header, BatchSize, RunState};
use fuzzer_engine::{
    load_wordlist, FileKeywordSink, KeywordSink, ProbeSettings, ReqwestTransport, Session,
};
use fuzzer_logging::{fuzz_info, fuzz_warn};

use crate::cli::Cli;
use crate::report::{self, ConsoleReporter};

/// How a run ended when it did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunEnd {
    Completed,
    Cancelled,
}

/// Validates the configuration, then drives one fuzzing session until it ends
/// or `shutdown` resolves.
///
/// Every startup check runs before the first request. The output file, when
/// configured, is closed on every path out of the loop. A shutdown abandons
/// the in-flight batch and skips the summary.
pub async fn run_until(
    cli: Cli,
    shutdown: impl Future<Output = ()>,
) -> anyhow::Result<RunEnd> {
    let batch_size = BatchSize::try_from(cli.count)?;

    let words = load_wordlist(&cli.wordlist)?;
    report::info(format!("Loaded {} words from wordlist", words.len()));

    let mut settings = ProbeSettings::default();
    for raw in &cli.headers {
        let (name, value) = parse_header(raw)?;
        report::info(format!("Added header: {name}: {value}"));
        settings = settings.with_header(name, value);
    }
    let transport = ReqwestTransport::new(cli.url, &settings)
        .context("invalid request configuration")?;

    let mut sink = cli
        .output
        .as_deref()
        .map(FileKeywordSink::create)
        .transpose()?;
    if let Some(sink) = &sink {
        report::info(format!("Output will be saved to: {}", sink.path().display()));
    }
    let output_path: Option<PathBuf> = sink.as_ref().map(|sink| sink.path().to_path_buf());

    report::info("Starting fuzzing... (Press Ctrl+C to stop)");
    fuzz_info!("Target endpoint {}", transport.endpoint());

    let reporter = ConsoleReporter::new(cli.verbose);
    let session = Session::new(&transport, &reporter, batch_size);
    let mut state = RunState::new(words.len());

    let finished = tokio::select! {
        result = session.run(
            &words,
            &mut state,
            sink.as_mut().map(|sink| sink as &mut dyn KeywordSink),
        ) => Some(result),
        _ = shutdown => None,
    };

    let Some(result) = finished else {
        report::cancelled();
        close_sink(sink);
        fuzz_info!(
            "Interrupted after {} requests with {} unique keywords",
            state.requests_sent(),
            state.keyword_count()
        );
        return Ok(RunEnd::Cancelled);
    };

    close_sink(sink);
    result.context("unexpected error during fuzzing")?;

    report::print_summary(&state.summary(), output_path.as_deref());
    Ok(RunEnd::Completed)
}

fn close_sink(sink: Option<FileKeywordSink>) {
    if let Some(sink) = sink {
        let path = sink.path().to_path_buf();
        if let Err(err) = sink.close() {
            fuzz_warn!("Failed to close output file {:?}: {}", path, err);
        }
    }
}

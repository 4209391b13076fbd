//! `pollmq` binary entry point.
//!
//! Brings up the broker's in-memory state, starts the periodic expiry
//! sweeper, and serves the HTTP facade until the process receives a
//! shutdown signal.

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use pollmq::config::{AppConfig, Args};
use pollmq_core::{BrokerConfig, BrokerState};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	let args = Args::parse();
	setup_tracing(args.verbose, args.log_dir.as_deref());

	info!("starting pollmq");

	let broker_config = BrokerConfig {
		session_ttl_secs: args.session_ttl,
	};
	let broker = Arc::new(BrokerState::new(broker_config));
	let app_config = AppConfig::from(&args);

	spawn_sweeper(Arc::clone(&broker), args.session_ttl);

	let router = pollmq::build_router(Arc::clone(&broker), app_config);

	let listener = tokio::net::TcpListener::bind(&args.bind).await?;
	info!(bind = %args.bind, "listening");

	axum::serve(listener, router)
		.with_graceful_shutdown(shutdown_signal())
		.await?;

	Ok(())
}

/// Run `expire()` on a fixed cadence in addition to the on-demand sweep
/// `receive` triggers, so idle topics and sessions are reclaimed even
/// without traffic (§4.4). Cadence is a quarter of the session ttl, floored
/// at 30 seconds, so a short `SESSION_TTL` in tests still sweeps promptly.
fn spawn_sweeper(broker: Arc<BrokerState>, session_ttl_secs: u64) {
	tokio::spawn(async move {
		let period = Duration::from_secs((session_ttl_secs / 4).max(30));
		let mut interval = tokio::time::interval(period);
		loop {
			interval.tick().await;
			let report = broker.expire();
			if !report.expired_sessions.is_empty() || !report.expired_messages.is_empty() {
				info!(
					expired_sessions = report.expired_sessions.len(),
					expired_messages = report.expired_messages.len(),
					"periodic sweep"
				);
			}
		}
	});
}

async fn shutdown_signal() {
	let ctrl_c = async {
		tokio::signal::ctrl_c().await.expect("failed to install ctrl-c handler");
	};

	#[cfg(unix)]
	let terminate = async {
		tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
			.expect("failed to install signal handler")
			.recv()
			.await;
	};

	#[cfg(not(unix))]
	let terminate = std::future::pending::<()>();

	tokio::select! {
		_ = ctrl_c => {},
		_ = terminate => {},
	}

	info!("shutdown signal received");
}

fn setup_tracing(verbose: bool, log_dir: Option<&std::path::Path>) {
	use std::fs::OpenOptions;

	use tracing_subscriber::fmt::format::FmtSpan;
	use tracing_subscriber::prelude::*;
	use tracing_subscriber::EnvFilter;

	let build_filter = || {
		EnvFilter::try_from_default_env().unwrap_or_else(|_| {
			if verbose {
				EnvFilter::new("pollmq=debug,info")
			} else {
				EnvFilter::new("pollmq=info,warn")
			}
		})
	};

	if let Some(log_dir) = log_dir {
		if std::fs::create_dir_all(log_dir).is_ok() {
			let pid = std::process::id();
			let log_path = log_dir.join(format!("pollmq.{pid}.log"));
			if let Ok(file) = OpenOptions::new().create(true).append(true).open(&log_path) {
				let file_layer = tracing_subscriber::fmt::layer()
					.with_writer(file)
					.with_ansi(false)
					.with_span_events(FmtSpan::CLOSE)
					.with_target(true);

				tracing_subscriber::registry().with(build_filter()).with(file_layer).init();

				tracing::info!(path = ?log_path, "pollmq tracing initialized");
				return;
			}
		}
	}

	tracing_subscriber::fmt().with_env_filter(build_filter()).init();
}

//! Process-wide configuration, loaded once at startup (§6).

use clap::Parser;
use pollmq_core::config::DEFAULT_SESSION_TTL_SECS;

/// Default `ttl` applied to a publish that omits the field.
pub const DEFAULT_TTL_SECS: u64 = 300;

/// Sentinel `ttl` substituted when a publish submits a negative value.
///
/// Chosen large enough that nothing reasonably expires (roughly 100 years);
/// `expire_ts` is still an ordinary `u64` comparison, there is no magic
/// "never" value at the data-model layer (§3, §9).
pub const NEVER_EXPIRE_TTL_SECS: u64 = 60 * 60 * 24 * 365 * 100;

/// Command-line / environment configuration for the `pollmq` server.
///
/// `auth_key` deliberately has no `#[arg(long)]` — it is environment-only so
/// it never shows up in `ps`, unlike the bind address and TTL tunables.
#[derive(Parser, Debug)]
#[command(name = "pollmq")]
#[command(about = "In-memory topic pub/sub broker over HTTP")]
pub struct Args {
	/// Address to bind the HTTP server to.
	#[arg(long, env = "POLLMQ_BIND", default_value = "0.0.0.0:5000")]
	pub bind: String,

	/// Shared secret required on admin endpoints.
	#[arg(env = "AUTH_KEY")]
	pub auth_key: String,

	/// Default ttl (seconds) for publishes that omit the field.
	#[arg(long, env = "DEFAULT_TTL", default_value_t = DEFAULT_TTL_SECS)]
	pub default_ttl: u64,

	/// Sentinel ttl (seconds) substituted for a negative publish ttl.
	#[arg(long, env = "NEVER_EXPIRE_TTL", default_value_t = NEVER_EXPIRE_TTL_SECS)]
	pub never_expire_ttl: u64,

	/// Seconds of inactivity after which an idle session is swept.
	#[arg(long, env = "SESSION_TTL", default_value_t = DEFAULT_SESSION_TTL_SECS)]
	pub session_ttl: u64,

	/// Verbose (debug-level) logging.
	#[arg(short, long)]
	pub verbose: bool,

	/// Directory to write a per-process log file to, in addition to stderr.
	/// Modeled on the teacher's `XENO_LOG_DIR` smoke-testing hook.
	#[arg(long, env = "POLLMQ_LOG_DIR")]
	pub log_dir: Option<std::path::PathBuf>,
}

/// The subset of [`Args`] the request handlers need, stripped of CLI/env
/// plumbing concerns.
#[derive(Debug, Clone)]
pub struct AppConfig {
	pub auth_key: String,
	pub default_ttl: u64,
	pub never_expire_ttl: u64,
}

impl From<&Args> for AppConfig {
	fn from(args: &Args) -> Self {
		Self {
			auth_key: args.auth_key.clone(),
			default_ttl: args.default_ttl,
			never_expire_ttl: args.never_expire_ttl,
		}
	}
}

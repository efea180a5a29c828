//! Login with Twitter web app: resolves consumer credentials, then serves the welcome page,
//! the login-URL generator, and the callback chain on `localhost:8080`.

// std
use std::process::ExitCode;
// self
use oauth1_login::{
	config::{Cli, Config},
	obs, server,
};

#[tokio::main]
async fn main() -> ExitCode {
	obs::init_tracing();

	let cli = Cli::parse_args();
	let credentials = match cli.credentials() {
		Ok(credentials) => credentials,
		Err(e) => {
			tracing::error!("{e}");

			return ExitCode::FAILURE;
		},
	};

	if let Err(e) = server::serve(Config::new(credentials)).await {
		tracing::error!("{e}");

		return ExitCode::FAILURE;
	}

	ExitCode::SUCCESS
}

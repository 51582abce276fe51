// SPDX-License-Identifier: MPL-2.0
use bazam::app::{self, paths, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Bazam storefront

USAGE:
  bazam [OPTIONS]

OPTIONS:
  --lang <code>        Interface language (en, es, fr, de, it, pt, ru, zh, ja, ko, ar)
  --route <path>       Page to open first (e.g. /orders)
  --i18n-dir <dir>     Directory with .ftl files overriding the built-in translations
  --config-dir <dir>   Directory holding settings.toml [env: BAZAM_CONFIG_DIR]
  --data-dir <dir>     Directory holding session.json [env: BAZAM_DATA_DIR]
  -h, --help           Print this help

ENVIRONMENT:
  BAZAM_AUTH_URL, BAZAM_AUTH_ANON_KEY   Auth service endpoint and public key
  RUST_LOG                              Log filter (default: bazam=info)
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        route: args.opt_value_from_str("--route")?,
        i18n_dir: args.opt_value_from_str("--i18n-dir")?,
        data_dir: args.opt_value_from_str("--data-dir")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }

    Ok(Some(flags))
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("bazam=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(error) => {
            eprintln!("error: {error}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());
    app::run(flags)
}

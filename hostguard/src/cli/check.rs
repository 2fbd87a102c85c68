use hostguard_core::conf::{ConfigError, load_policy};
use hostguard_core::policy::PolicyError;
use owo_colors::OwoColorize;
use std::path::PathBuf;

pub fn check(config: PathBuf, plain: bool) -> anyhow::Result<()> {
    match load_policy(&config) {
        Ok(policy) => {
            println!("✔ Policy loaded successfully");
            println!("✔ canonical host: {}", policy.canonical_host());
            println!(
                "✔ https enforcement: {}",
                if policy.enforce_https() { "on" } else { "off" }
            );
            println!("✔ {} fixed rewrites", policy.rewrite_count());
            println!("✔ {} whitelist entries", policy.whitelist_count());
            Ok(())
        }
        Err(err) => {
            print_config_error(err, plain);
            std::process::exit(1);
        }
    }
}

fn print_config_error(err: ConfigError, plain: bool) {
    let hint = config_error_hint(&err);

    if plain {
        eprintln!("{}", err);
    } else {
        eprintln!("{}: {}", "error".red().bold(), err);

        let mut source = std::error::Error::source(&err);
        while let Some(cause) = source {
            eprintln!("  caused by: {}", cause);
            source = std::error::Error::source(cause);
        }
    }

    if let Some(hint) = hint {
        eprintln!();
        eprintln!("{}", hint);
    }
}

fn config_error_hint(err: &ConfigError) -> Option<&'static str> {
    let ConfigError::InvalidPolicy(policy_err) = err else {
        return None;
    };

    match policy_err {
        //---------------------------------------------------------------------
        // Canonical host errors
        //---------------------------------------------------------------------
        PolicyError::EmptyCanonicalHost | PolicyError::InvalidCanonicalHost { .. } => Some(
            "canonical_host must be the bare domain the service presents itself as.\n\
             \n\
             Example:\n\
             \n\
             canonical_host = \"example.com\"",
        ),

        //---------------------------------------------------------------------
        // Redirect target errors
        //---------------------------------------------------------------------
        PolicyError::UnsafeTarget { .. } => Some(
            "Redirect targets must be same-site relative paths, never full URLs.\n\
             \n\
             Example:\n\
             \n\
             [whitelist]\n\
             allowed-page1 = \"/allowed-page1\"",
        ),

        PolicyError::ChainedRewrite { .. } => Some(
            "A redirect target must not itself be rewritten again.\n\
             \n\
             Point the entry straight at the final path instead.",
        ),
    }
}

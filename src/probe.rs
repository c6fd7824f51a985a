use accordion::{CandidateUrls, FsImageLoader, MenuManifest, ResolveOutcome};
use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

/// Command-line options
struct Config {
    /// Manifest to probe; the built-in roster when absent
    manifest: Option<PathBuf>,
    /// Directory candidate paths are resolved against
    root: Option<PathBuf>,
    /// Only list candidates, do not touch the filesystem
    list_only: bool,
}

fn parse_args() -> Result<Config> {
    let args: Vec<String> = env::args().collect();
    let mut config = Config {
        manifest: None,
        root: None,
        list_only: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-manifest" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-manifest requires a file path argument");
                }
                config.manifest = Some(PathBuf::from(&args[i]));
            }
            "-root" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-root requires a directory argument");
                }
                config.root = Some(PathBuf::from(&args[i]));
            }
            "-list" => {
                config.list_only = true;
            }
            "-h" | "-help" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {
                log::warn!("Unknown argument: {}", args[i]);
            }
        }
        i += 1;
    }

    Ok(config)
}

fn print_help() {
    println!("Accordion image probe");
    println!("Usage: accordion-probe [OPTIONS]");
    println!();
    println!("Resolves every panel's background image the same way the menu does");
    println!("and prints each candidate path attempted.");
    println!();
    println!("OPTIONS:");
    println!("  -manifest <FILE>       Menu manifest (default: built-in roster)");
    println!("  -root <DIR>            Directory image paths are relative to");
    println!("                         (default: the manifest's directory, else '.')");
    println!("  -list                  Only list candidate paths, load nothing");
    println!("  -h, -help, --help      Show this help message");
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = parse_args()?;

    let manifest = match &config.manifest {
        Some(path) => MenuManifest::load(path)?,
        None => MenuManifest::builtin(),
    };
    let root = config
        .root
        .clone()
        .or_else(|| {
            config
                .manifest
                .as_ref()
                .and_then(|path| path.parent())
                .filter(|dir| !dir.as_os_str().is_empty())
                .map(PathBuf::from)
        })
        .unwrap_or_else(|| PathBuf::from("."));

    if config.list_only {
        for spec in &manifest.panels {
            println!("{} ({})", spec.label, spec.image_id);
            let candidates = CandidateUrls::new(
                &manifest.config.image_base,
                &spec.image_id,
                spec.preferred_extension.as_deref(),
            );
            for (position, url) in candidates.enumerate() {
                println!("  {:>2}. {}", position + 1, url);
            }
        }
        return Ok(());
    }

    let loader = FsImageLoader::new(&root);
    let root_display = root
        .canonicalize()
        .with_context(|| format!("image root {}", root.display()))?;
    println!("Image root: {}", root_display.display());

    let mut failures = 0;
    for mut panel in manifest.build_panels() {
        let Some(mut resolver) = panel.begin_image_resolution(&manifest.config.image_base) else {
            continue;
        };
        let resolution = resolver.resolve(&loader);

        println!("{} ({})", panel.label(), panel.id());
        let winner = match &resolution.outcome {
            ResolveOutcome::Resolved(url) => Some(url.as_str()),
            ResolveOutcome::Exhausted => None,
        };
        for url in &resolution.attempted {
            let mark = if Some(url.as_str()) == winner { "ok  " } else { "miss" };
            println!("  {} {}", mark, url);
        }
        match (&resolution.outcome, &resolution.image) {
            (ResolveOutcome::Resolved(_), Some(image)) => {
                println!("  -> {}x{}", image.width(), image.height());
            }
            _ => {
                println!("  -> no image, panel shows the fallback overlay");
                failures += 1;
            }
        }
    }

    if failures > 0 {
        println!("{} of {} panel(s) have no image", failures, manifest.panels.len());
    }

    Ok(())
}

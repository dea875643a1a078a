use clap::{Parser, Subcommand};
use daily_geode::date::PostDate;
use daily_geode::error::PostError;
use daily_geode::host::{self, Host, PickMode, PickOptions, PostOutcome};
use daily_geode::request::PickResult;
use daily_geode::{compose, config, imaging, logging, output};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(name = "daily-geode")]
#[command(about = "Compose The Daily Geode post images")]
#[command(long_about = "\
Compose The Daily Geode post images

A post is one background picture with the Geode logo, a header carrying the
brand name and the date, a separator line and a wrapped caption, saved as
post.png in the chosen output folder.

Configuration is read from post.toml in the config directory. Every key is
optional; missing keys fall back to the stock defaults.

  post.toml
  ├── output_dir                   # Where post.png goes (compose)
  ├── [canvas]    width, stretch   # Canvas is width x round(width / stretch)
  ├── [spacing]   padding, ...     # Margins, separator thickness
  ├── [header]    font, brand, ... # Brand name and date line
  ├── [caption]   font, text, ...  # Wrapped text at the bottom
  ├── [logo]      path, corner     # Composited over the background
  └── [source]    image | link     # Background (compose only)

Run 'daily-geode gen-config' to generate a documented post.toml.")]
#[command(version)]
struct Cli {
    /// Directory containing post.toml
    #[arg(long, default_value = ".", global = true)]
    config_dir: PathBuf,

    /// Log debug detail (RUST_LOG overrides)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the post button flow with the given image and output folder
    Post {
        /// Background image (png, jpg, jpeg, bmp). Omit to cancel the pick.
        #[arg(long)]
        image: Option<PathBuf>,
        /// Folder that receives post.png. Omit to cancel the pick.
        #[arg(long)]
        output_dir: Option<PathBuf>,
        /// Caption text, replacing the one from post.toml
        #[arg(long)]
        caption: Option<String>,
        /// Header date as YYYY-MM-DD (default: today)
        #[arg(long, value_parser = parse_date)]
        date: Option<PostDate>,
    },
    /// Compose directly from post.toml
    Compose,
    /// Validate post.toml, fonts and logo without writing anything
    Check,
    /// Print a stock post.toml with all options documented
    GenConfig,
}

fn parse_date(value: &str) -> Result<PostDate, String> {
    PostDate::parse_iso(value).ok_or_else(|| format!("'{value}' is not a YYYY-MM-DD date"))
}

/// Host whose dialogs answer with paths given on the command line.
struct TerminalHost {
    image: Option<PathBuf>,
    output_dir: Option<PathBuf>,
}

impl Host for TerminalHost {
    fn pick(&self, mode: PickMode, options: &PickOptions) -> PickResult {
        let filters: Vec<&str> = options.filters.iter().map(|f| f.description.as_str()).collect();
        debug!(?mode, ?filters, "Pick requested");

        match mode {
            PickMode::OpenFile => {
                let path = self.image.clone().ok_or(PostError::PickCancelled)?;
                if !path.is_file() {
                    return Err(PostError::PickFailed(format!(
                        "{} is not a file",
                        path.display()
                    )));
                }
                if !imaging::is_supported_image(&path) {
                    return Err(PostError::PickFailed(format!(
                        "{} is not one of: {}",
                        path.display(),
                        imaging::supported_input_extensions().join(", ")
                    )));
                }
                Ok(path)
            }
            PickMode::OpenFolder => self.output_dir.clone().ok_or(PostError::PickCancelled),
        }
    }

    fn alert(&self, title: &str, message: &str) {
        eprintln!("{title}: {message}");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match cli.command {
        Command::Post {
            image,
            output_dir,
            caption,
            date,
        } => {
            let mut template = config::load_config(&cli.config_dir)?;
            if let Some(caption) = caption {
                template.caption.text = caption;
            }
            if date.is_some() {
                template.date = date;
            }

            let terminal = TerminalHost { image, output_dir };
            match host::on_post_button(&terminal, &template) {
                Ok(PostOutcome::Composed(post)) => output::print_post_output(&post),
                Ok(PostOutcome::Cancelled) => println!("Cancelled: no image or output folder chosen"),
                // Already shown through the host alert.
                Err(_) => std::process::exit(1),
            }
        }
        Command::Compose => {
            let mut config = config::load_config(&cli.config_dir)?;
            config.stamp_today();
            let post = compose::compose(&config)?;
            output::print_post_output(&post);
        }
        Command::Check => {
            println!(
                "==> Checking {}",
                cli.config_dir.join(config::CONFIG_FILENAME).display()
            );
            let mut config = config::load_config(&cli.config_dir)?;
            config.stamp_today();
            let report = compose::check(&config)?;
            output::print_check_output(&report);
            println!("==> Config is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

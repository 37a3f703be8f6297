//! Command handlers for the `hydroscope` binary

mod crops;
mod estimate;
mod supply;
mod weather;

use anyhow::Result;

use hydroscope::config::{ColorMode, Config, Verbosity};
use hydroscope::presentation::{Cli, Commands, TextRenderer};
use hydroscope::ui::json::emit_event;
use hydroscope::ui::json::events::{
    CompleteEvent, ErrorEvent, ResultEvent, StartEvent, WarningEvent,
};
use hydroscope::ui::terminal::detect_capabilities;
use hydroscope::{Crop, HydroError};

/// Per-invocation output settings plus the resolved configuration
pub struct Session {
    pub command: &'static str,
    pub json: bool,
    pub verbosity: Verbosity,
    pub renderer: TextRenderer,
    pub config: Config,
}

impl Session {
    fn new(cli: &Cli, config: Config) -> Self {
        let verbosity = config.output.verbosity.bumped(cli.verbose);
        let caps = detect_capabilities();
        Self {
            command: cli.command.name(),
            json: cli.json,
            verbosity,
            renderer: TextRenderer {
                color: caps.use_color(cli.color.unwrap_or(config.output.color)),
                unicode: caps.supports_unicode,
                detailed: verbosity >= Verbosity::Verbose,
            },
            config,
        }
    }

    /// Diagnostic line on stderr, shown from `-v` up
    pub fn info(&self, message: impl AsRef<str>) {
        if self.verbosity >= Verbosity::Verbose {
            eprintln!("{}", message.as_ref());
        }
    }

    /// Diagnostic line on stderr, shown from `-vv` up
    pub fn debug(&self, message: impl AsRef<str>) {
        if self.verbosity >= Verbosity::Debug {
            eprintln!("[debug] {}", message.as_ref());
        }
    }

    pub fn warn(&self, message: impl Into<String>) -> Result<()> {
        let message = message.into();
        if self.json {
            emit_event(&WarningEvent::new(self.command, message))?;
        } else if self.verbosity > Verbosity::Quiet {
            eprintln!("{}", self.renderer.warning(&message));
        }
        Ok(())
    }

    /// Emit the command payload (JSON mode only)
    pub fn emit_result<T: serde::Serialize>(&self, data: T) -> Result<()> {
        emit_event(&ResultEvent::new(self.command, data))?;
        Ok(())
    }
}

pub fn run(cli: Cli, reporter: &mut ErrorReporter) -> Result<()> {
    let command = cli.command.name();
    if cli.json {
        emit_event(&StartEvent::new(command))?;
    }

    let working_dir = std::env::current_dir()?;
    let loaded = Config::resolve(cli.config.as_deref(), &working_dir)?;
    let session = Session::new(&cli, loaded.config);
    reporter.color = session.renderer.color;

    session.info(format!("config: {}", loaded.source));
    session.debug(format!("{:?}", session.config));
    for warning in &loaded.warnings {
        session.warn(warning.to_string())?;
    }

    match cli.command {
        Commands::Estimate(args) => estimate::run(&session, args)?,
        Commands::Crops => crops::run(&session)?,
        Commands::Supply { liters, pump } => supply::run(&session, liters, pump)?,
        Commands::Weather { file } => weather::run(&session, &file)?,
    }

    if session.json {
        emit_event(&CompleteEvent::success(command))?;
    }
    Ok(())
}

/// Reports a failed command in the format the user asked for.
///
/// Colors follow `--color` until the config is loaded, then the same
/// decision as the command's own output.
pub struct ErrorReporter {
    command: &'static str,
    json: bool,
    color: bool,
    unicode: bool,
}

impl ErrorReporter {
    pub fn from_cli(cli: &Cli) -> Self {
        let caps = detect_capabilities();
        Self {
            command: cli.command.name(),
            json: cli.json,
            color: caps.use_color(cli.color.unwrap_or(ColorMode::Auto)),
            unicode: caps.supports_unicode,
        }
    }

    fn renderer(&self) -> TextRenderer {
        TextRenderer {
            color: self.color,
            unicode: self.unicode,
            detailed: false,
        }
    }

    pub fn report(&self, err: &anyhow::Error) {
        let hydro = err.downcast_ref::<HydroError>();
        let help = hydro.and_then(help_for);

        if self.json {
            let code = hydro.map(HydroError::code).unwrap_or("error");
            let mut event = ErrorEvent::new(self.command, code, format!("{:#}", err));
            if let Some(help) = help {
                event = event.with_help(help);
            }
            // stdout may already be gone; nothing left to report to
            let _ = emit_event(&event);
            let _ = emit_event(&CompleteEvent::failure(self.command));
        } else {
            eprintln!("{}", self.renderer().error(&format!("{:#}", err)));
            if let Some(help) = help {
                eprintln!("  {}", help);
            }
        }
    }
}

fn help_for(err: &HydroError) -> Option<String> {
    match err {
        HydroError::UnsupportedCrop { .. } => {
            let supported: Vec<&str> = Crop::ALL
                .iter()
                .filter(|c| c.profile().is_supported())
                .map(|c| c.id())
                .collect();
            Some(format!("choose a crop with stage data: {}", supported.join(", ")))
        }
        HydroError::InvalidInput { .. } => Some("correct the value and run again".to_string()),
        HydroError::EmptyWeatherLog => {
            Some("log at least one observation before summarizing".to_string())
        }
        _ => None,
    }
}

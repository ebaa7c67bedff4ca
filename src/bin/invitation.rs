use std::{
    io::BufRead as _,
    path::{Path, PathBuf},
    sync::mpsc::{self, RecvTimeoutError},
    time::{Duration, Instant},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use invitation::{
    ClipboardWriter, CommandShareSheet, Controller, GuestName, InvitationConfig,
    InvitationRenderer, InviteResult, JsonFileStore, Key, MemoryStore, Millis, ModalClick,
    RenderOpts, ShareOutcome, Unavailable, render_text,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "invitation", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive guest flow on the terminal.
    Run(RunArgs),
    /// Render one invitation card as a PNG.
    Render(RenderArgs),
    /// Share one invitation through the fallback chain.
    Share(ShareArgs),
}

#[derive(Parser, Debug)]
struct RunArgs {
    /// JSON config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON file holding the persisted guest name.
    #[arg(long, default_value = "invitation-storage.json")]
    storage: PathBuf,

    /// Directory receiving downloaded cards.
    #[arg(long, default_value = ".")]
    out: PathBuf,

    /// Skip the system clipboard step when sharing.
    #[arg(long)]
    no_clipboard: bool,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Guest name printed on the card. Empty prints the placeholder.
    #[arg(long, default_value = "")]
    name: String,

    /// Output directory.
    #[arg(long, default_value = ".")]
    out: PathBuf,

    /// Device pixels per logical pixel (overrides the config).
    #[arg(long)]
    scale: Option<u32>,

    /// JSON config file.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct ShareArgs {
    /// Guest name used in the share text.
    #[arg(long, default_value = "")]
    name: String,

    /// Link to share (overrides the config).
    #[arg(long)]
    url: Option<String>,

    /// JSON config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Skip the system clipboard step.
    #[arg(long)]
    no_clipboard: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Run(args) => cmd_run(args),
        Command::Render(args) => cmd_render(args),
        Command::Share(args) => cmd_share(args),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<InvitationConfig> {
    match path {
        Some(p) => InvitationConfig::from_path(p)
            .with_context(|| format!("load config '{}'", p.display())),
        None => Ok(InvitationConfig::default()),
    }
}

fn make_renderer(config: &InvitationConfig) -> anyhow::Result<InvitationRenderer> {
    InvitationRenderer::new(&RenderOpts {
        scale: config.scale,
        font_dir: config.font_dir.clone(),
    })
    .context("initialize renderer")
}

fn make_clipboard(disabled: bool) -> Box<dyn ClipboardWriter> {
    if disabled {
        return Box::new(Unavailable);
    }
    #[cfg(feature = "system-clipboard")]
    {
        Box::new(invitation::SystemClipboard::new())
    }
    #[cfg(not(feature = "system-clipboard"))]
    {
        Box::new(Unavailable)
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(scale) = args.scale {
        config.scale = scale;
    }
    config.validate()?;

    let renderer = make_renderer(&config)?;
    let name = GuestName::parse(&args.name);
    let bitmap = renderer.render(&name, &config.event)?;
    let path = invitation::download(&bitmap, &name, &args.out)?;

    eprintln!("wrote {}", path.display());
    Ok(())
}

fn cmd_share(args: ShareArgs) -> anyhow::Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(url) = args.url {
        config.page_url = url;
    }

    let mut sheet = CommandShareSheet::new(config.share_command.clone());
    let mut clipboard = make_clipboard(args.no_clipboard);
    let mut ctl = Controller::load(MemoryStore::new(), config)?;
    ctl.set_name(&args.name);

    match ctl.share(Millis(0), &mut sheet, clipboard.as_mut()) {
        ShareOutcome::Shared => println!("{}", invitation::MSG_SHARED),
        ShareOutcome::LinkCopied => println!("{}", invitation::MSG_LINK_COPIED),
        ShareOutcome::Manual(payload) => {
            println!("{}", payload.title);
            println!("{}", payload.text);
            println!("{}", payload.url);
        }
    }
    Ok(())
}

const HELP: &str = "\
type a name and press Enter to confirm
  (empty line)   Enter with the current name
  :name TEXT     edit the name without confirming
  :confirm       press the confirm button
  :share         share the invitation
  :download      save the invitation as PNG
  :close         close the share dialog
  :backdrop      click outside the share dialog
  :esc           reset to the entry screen
  :help          show this help
  :quit          exit";

struct Session {
    ctl: Controller<JsonFileStore>,
    renderer: InvitationRenderer,
    sheet: CommandShareSheet,
    clipboard: Box<dyn ClipboardWriter>,
    out_dir: PathBuf,
}

impl Session {
    /// Apply one input line. Returns `false` when the user asked to quit.
    fn apply(&mut self, line: &str, now: Millis) -> InviteResult<bool> {
        let (cmd, rest) = match line.strip_prefix(':') {
            Some(cmd) => cmd.split_once(' ').unwrap_or((cmd, "")),
            None => {
                if !line.is_empty() {
                    self.ctl.set_name(line);
                }
                self.ctl.handle_key(Key::Enter, now)?;
                return Ok(true);
            }
        };

        match cmd {
            "q" | "quit" => return Ok(false),
            "name" => self.ctl.set_name(rest),
            "confirm" => {
                self.ctl.confirm(now)?;
            }
            "share" => {
                self.ctl
                    .share(now, &mut self.sheet, self.clipboard.as_mut());
            }
            "download" => {
                if let Some(path) = self.ctl.download(now, &self.renderer, &self.out_dir) {
                    println!("saved {}", path.display());
                }
            }
            "close" => {
                self.ctl.click_modal(ModalClick::CloseButton);
            }
            "backdrop" => {
                self.ctl.click_modal(ModalClick::Backdrop);
            }
            "esc" | "reset" => self.ctl.handle_key(Key::Escape, now)?,
            "help" => println!("{HELP}"),
            other => eprintln!("unknown command ':{other}' (try :help)"),
        }
        Ok(true)
    }

    fn view(&self) -> String {
        render_text(self.ctl.state(), &self.ctl.config().event)
    }
}

fn spawn_stdin_reader() -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel();
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let Ok(line) = line else {
                break;
            };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}

fn cmd_run(args: RunArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    let store = JsonFileStore::open(&args.storage)?;
    let renderer = make_renderer(&config)?;

    let mut session = Session {
        sheet: CommandShareSheet::new(config.share_command.clone()),
        clipboard: make_clipboard(args.no_clipboard),
        ctl: Controller::load(store, config)?,
        renderer,
        out_dir: args.out,
    };

    let start = Instant::now();
    let now = move || Millis(u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX));

    println!("{HELP}");
    let mut shown = session.view();
    print!("\n{shown}");

    let lines = spawn_stdin_reader();
    loop {
        match lines.recv_timeout(Duration::from_millis(50)) {
            Ok(line) => match session.apply(line.trim_end_matches('\r'), now()) {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) => eprintln!("error: {e}"),
            },
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => {
                // Input ended: let a running transition finish before exiting.
                while session.ctl.advance_pending() {
                    if let Some(due) = session.ctl.next_deadline() {
                        std::thread::sleep(Duration::from_millis(due.since(now())));
                    }
                    session.ctl.tick(now());
                }
                let view = session.view();
                if view != shown {
                    print!("\n{view}");
                }
                break;
            }
        }

        session.ctl.tick(now());
        let view = session.view();
        if view != shown {
            print!("\n{view}");
            shown = view;
        }
    }

    Ok(())
}

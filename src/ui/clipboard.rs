use std::io::Write;
use std::process::{Command, Stdio};

#[derive(thiserror::Error, Debug)]
pub enum ClipboardError {
    #[error("no clipboard tool available ({0})")]
    Unavailable(String),
    #[error("clipboard tool failed: {0}")]
    Io(#[from] std::io::Error),
}

pub trait Clipboard: Send + Sync {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// System clipboard through the platform's command line tools
#[derive(Debug, Default, Clone)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        for (program, args) in CLIPBOARD_COMMANDS {
            match pipe_to(program, args, text) {
                Ok(true) => return Ok(()),
                Ok(false) => continue,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
                Err(e) => return Err(e.into()),
            }
        }
        Err(ClipboardError::Unavailable(
            CLIPBOARD_COMMANDS
                .iter()
                .map(|(program, _)| *program)
                .collect::<Vec<_>>()
                .join(", "),
        ))
    }
}

type ClipboardCommand = (&'static str, &'static [&'static str]);

/// Candidate tools in order of preference
#[cfg(target_os = "macos")]
const CLIPBOARD_COMMANDS: &[ClipboardCommand] = &[("pbcopy", &[])];

#[cfg(target_os = "windows")]
const CLIPBOARD_COMMANDS: &[ClipboardCommand] = &[("clip", &[])];

// wl-copy on Wayland, then xclip, then xsel
#[cfg(target_os = "linux")]
const CLIPBOARD_COMMANDS: &[ClipboardCommand] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

#[cfg(not(any(target_os = "macos", target_os = "windows", target_os = "linux")))]
const CLIPBOARD_COMMANDS: &[ClipboardCommand] = &[];

fn pipe_to(program: &str, args: &[&str], text: &str) -> std::io::Result<bool> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(text.as_bytes())?;
    }

    Ok(child.wait()?.success())
}

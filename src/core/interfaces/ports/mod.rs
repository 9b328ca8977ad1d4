mod clipboard_port;
mod process_launcher;

pub use clipboard_port::ClipboardPort;
pub use process_launcher::ProcessLauncher;
